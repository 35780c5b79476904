//! Domain error types

use thiserror::Error;

/// Error when an unknown notification backend is named
#[derive(Debug, Clone, Error)]
#[error("Invalid backend: \"{input}\". Valid backends are: native, notify-send")]
pub struct InvalidBackendError {
    pub input: String,
}

/// Error when configuration fails
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(String),

    #[error("Failed to parse config file: {0}")]
    ParseError(String),

    #[error("Invalid config value for '{key}': {message}")]
    ValidationError { key: String, message: String },
}
