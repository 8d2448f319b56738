//! Shape inference configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_MAX_DEPTH;

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ShapeConfig {
    /// Depth budget for field signatures. Default: 2.
    pub max_depth: Option<usize>,
}

impl ShapeConfig {
    /// Returns the effective depth budget, defaulting to 2.
    pub fn effective_max_depth(&self) -> usize {
        self.max_depth.unwrap_or(DEFAULT_MAX_DEPTH)
    }
}
