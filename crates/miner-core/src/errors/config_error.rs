//! Configuration loading errors.

use super::error_code::{self, MinerErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config value for {field}: {message}")]
    InvalidValue { field: String, message: String },
}

impl MinerErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidValue { .. } => error_code::CONFIG_INVALID_VALUE,
            _ => error_code::CONFIG_ERROR,
        }
    }
}
