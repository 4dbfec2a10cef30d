//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors raised by the aggregation core
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Row {row} is missing required field '{field}'")]
    MissingField { field: String, row: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl AggregateError {
    pub fn missing(field: impl Into<String>, row: usize) -> Self {
        Self::MissingField {
            field: field.into(),
            row,
        }
    }

    pub fn invalid(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

/// Errors that can occur while loading rows
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to read input: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON deserialization failed: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Invalid row format: {0}")]
    InvalidFormat(String),
}

/// Errors that can occur while loading a pipeline config file
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Config TOML parse error: {0}")]
    ParseFailed(#[from] toml::de::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
