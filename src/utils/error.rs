// src/utils/error.rs
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Malformed or incomplete request body. The message is returned to the client as-is.
    #[error("{0}")]
    Validation(String),

    #[error("Invalid base64 image: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    Io(String),

    #[error("Face verification failed: {0}")]
    Verification(String),
}

impl GatewayError {
    pub fn is_client_error(&self) -> bool {
        matches!(self, GatewayError::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
