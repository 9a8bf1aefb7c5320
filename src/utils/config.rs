use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use config::{builder::DefaultState, Config as ConfigLib, ConfigBuilder, ConfigError, Environment, File};
use crate::utils::error::{Result, GatewayError};

/// Plain port variables honoured on top of the layered sources, first set wins.
const PORT_ENVS: [&str; 2] = ["DEEPFACE_API_LOCAL_PORT", "PORT"];

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub verifier: VerifierConfig,
    pub log: LogConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub workers: Option<usize>,
    pub max_request_size: usize,
    #[serde(default)]
    pub cors_allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VerifierConfig {
    pub program: String,
    #[serde(default)]
    pub args: Vec<String>,
    pub model: String,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    #[serde(default)]
    pub temp_dir: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LogConfig {
    pub level: String,
    #[serde(default)]
    pub directory: Option<String>,
}

impl Config {
    pub fn new() -> Result<Self> {
        let mut builder = Self::defaults()?
            // Load from config files when present
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))

            // Override with environment variables (e.g., APP_SERVER__PORT)
            .add_source(
                Environment::with_prefix("APP")
                    .prefix_separator("_")
                    .separator("__")
                    .list_separator(",")
                    .with_list_parse_key("server.cors_allowed_origins")
                    .with_list_parse_key("verifier.args")
                    .try_parsing(true),
            );

        if let Some(port) = port_override()? {
            builder = builder.set_override("server.port", port)?;
        }

        Self::from_builder(builder)
    }

    /// Builder holding only the built-in defaults.
    pub fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let builder = ConfigLib::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 5000)?
            .set_default("server.max_request_size", 10_485_760)?  // 10MB
            .set_default("verifier.program", "deepface-verify")?
            .set_default("verifier.model", "ArcFace")?
            .set_default("log.level", "info")?;

        Ok(builder)
    }

    pub fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let config: Self = builder.build()?.try_deserialize()?;
        config.validate()?;

        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(GatewayError::Config("Invalid port number".into()));
        }
        if self.server.max_request_size == 0 {
            return Err(GatewayError::Config("max_request_size must be greater than 0".into()));
        }
        if self.server.workers == Some(0) {
            return Err(GatewayError::Config("workers must be greater than 0".into()));
        }

        if self.verifier.program.trim().is_empty() {
            return Err(GatewayError::Config("verifier program must be set".into()));
        }
        if self.verifier.timeout_secs == Some(0) {
            return Err(GatewayError::Config("verifier timeout_secs must be greater than 0".into()));
        }

        Ok(())
    }
}

impl VerifierConfig {
    /// Model passed to the verifier; `None` leaves the choice to the verifier itself.
    pub fn model(&self) -> Option<&str> {
        let model = self.model.trim();
        (!model.is_empty()).then_some(model)
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }

    pub fn temp_dir(&self) -> PathBuf {
        self.temp_dir
            .as_ref()
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir)
    }
}

fn port_override() -> Result<Option<i64>> {
    let Some((name, raw)) = PORT_ENVS.iter().find_map(|name| {
        env::var(name)
            .ok()
            .filter(|raw| !raw.trim().is_empty())
            .map(|raw| (*name, raw))
    }) else {
        return Ok(None);
    };

    raw.trim()
        .parse::<u16>()
        .map(|port| Some(i64::from(port)))
        .map_err(|_| GatewayError::Config(format!("{} must be a valid port number, got '{}'", name, raw)))
}

impl From<ConfigError> for GatewayError {
    fn from(error: ConfigError) -> Self {
        GatewayError::Config(error.to_string())
    }
}
