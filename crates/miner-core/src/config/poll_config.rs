//! Polling driver configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_POLL_INTERVAL_MS;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PollConfig {
    /// Milliseconds between scans. Default: 1000.
    pub interval_ms: Option<u64>,
}

impl PollConfig {
    pub fn effective_interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms.unwrap_or(DEFAULT_POLL_INTERVAL_MS))
    }
}
