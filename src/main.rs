use anyhow::Context;
use face_compare_gateway::{
    utils::{config::Config, logging},
    Application,
};
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let config = Config::new().context("Failed to load configuration")?;

    // Held until exit so buffered file logs are flushed
    let _log_guard = logging::init(&config.log).context("Failed to initialize logging")?;

    info!("Starting Face Compare Gateway v{}", env!("CARGO_PKG_VERSION"));

    let app = Application::new(config).map_err(|e| {
        error!("Failed to initialize application: {}", e);
        e
    })?;

    let server = app.start().map_err(|e| {
        error!("Failed to start application: {}", e);
        e
    })?;
    let handle = server.handle();
    tokio::pin!(server);

    info!("Application started successfully");

    let shutdown = tokio::select! {
        result = &mut server => {
            result?;
            None
        }
        signal = signal::ctrl_c() => Some(signal),
    };

    match shutdown {
        Some(Ok(())) => {
            info!("Received shutdown signal");
            // Let in-flight comparisons finish
            let ((), result) = tokio::join!(handle.stop(true), &mut server);
            result?;
        }
        Some(Err(err)) => {
            error!("Failed to listen for shutdown signal: {}", err);
            server.await?;
        }
        None => {}
    }

    info!("Application shutdown complete");
    Ok(())
}
