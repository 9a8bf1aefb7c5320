use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::utils::{
    config::LogConfig,
    error::{GatewayError, Result},
};

const LOG_FILE_PREFIX: &str = "face-compare-gateway.log";

/// Installs the global subscriber. `RUST_LOG` takes precedence over the configured level.
///
/// The returned guard flushes the file appender and must be held until shutdown.
pub fn init(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| GatewayError::Config(format!("Invalid log level '{}': {}", config.level, e)))?;

    let stdout_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_level(true)
        .with_file(true)
        .with_line_number(true);

    let registry = tracing_subscriber::registry().with(filter).with(stdout_layer);

    match &config.directory {
        Some(directory) => {
            let appender = tracing_appender::rolling::daily(directory, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            registry
                .with(fmt::layer().with_ansi(false).with_writer(writer))
                .try_init()
                .map_err(|e| GatewayError::Config(format!("Failed to install logger: {}", e)))?;

            Ok(Some(guard))
        }
        None => {
            registry
                .try_init()
                .map_err(|e| GatewayError::Config(format!("Failed to install logger: {}", e)))?;

            Ok(None)
        }
    }
}
