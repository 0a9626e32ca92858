//! Error types for keeppt-core
//!
//! The shell itself is total; errors only come from loading and validating
//! configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for keeppt operations
#[derive(Error, Debug)]
pub enum ShellError {
    #[error("Failed to read config file: {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config: {message}")]
    ConfigParse {
        message: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },
}

impl ShellError {
    pub fn invalid(message: impl Into<String>) -> Self {
        ShellError::InvalidConfig {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, ShellError>;
