//! Logging configuration.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `MINER_LOG` is unset. Default: "warn".
    pub level: Option<String>,
    /// Emit JSON lines instead of human-readable output. Default: false.
    pub json: Option<bool>,
}

impl LoggingConfig {
    pub fn effective_level(&self) -> &str {
        self.level.as_deref().unwrap_or("warn")
    }

    pub fn effective_json(&self) -> bool {
        self.json.unwrap_or(false)
    }
}
