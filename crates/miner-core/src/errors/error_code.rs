//! Stable error codes surfaced to logs and front-ends.

/// Every error type in the workspace maps onto a stable string code.
pub trait MinerErrorCode {
    fn error_code(&self) -> &'static str;

    /// `[CODE] message`, the form used in CLI output.
    fn coded_message(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const HOST_MISSING: &str = "HOST_MISSING";
pub const ENTITY_VANISHED: &str = "ENTITY_VANISHED";
pub const MALFORMED_RECORD: &str = "MALFORMED_RECORD";
pub const REGISTRY_UNAVAILABLE: &str = "REGISTRY_UNAVAILABLE";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const CONFIG_INVALID_VALUE: &str = "CONFIG_INVALID_VALUE";
pub const CAPTURE_ERROR: &str = "CAPTURE_ERROR";
pub const CAPTURE_INVALID: &str = "CAPTURE_INVALID";
