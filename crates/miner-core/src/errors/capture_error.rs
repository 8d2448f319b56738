//! Errors loading a captured host document.

use super::error_code::{self, MinerErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("failed to read capture {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse capture: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid capture: {message}")]
    Invalid { message: String },
}

impl MinerErrorCode for CaptureError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Invalid { .. } => error_code::CAPTURE_INVALID,
            _ => error_code::CAPTURE_ERROR,
        }
    }
}
