pub mod logging_config;
pub mod poll_config;
pub mod shape_config;
pub mod template_config;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

pub use logging_config::LoggingConfig;
pub use poll_config::PollConfig;
pub use shape_config::ShapeConfig;
pub use template_config::TemplateConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MinerConfig {
    pub shape: ShapeConfig,
    pub templates: TemplateConfig,
    pub poll: PollConfig,
    pub logging: LoggingConfig,
}

impl MinerConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    /// Load config from a file on disk.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Reject values that would make the scanner meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.shape.max_depth == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "shape.max_depth".to_string(),
                message: "depth must be at least 1".to_string(),
            });
        }
        if self.poll.interval_ms == Some(0) {
            return Err(ConfigError::InvalidValue {
                field: "poll.interval_ms".to_string(),
                message: "interval must be positive".to_string(),
            });
        }
        Ok(())
    }
}
