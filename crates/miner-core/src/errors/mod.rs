//! Error types for every subsystem, each carrying a stable error code.

pub mod capture_error;
pub mod config_error;
pub mod error_code;
pub mod host_error;

pub use capture_error::CaptureError;
pub use config_error::ConfigError;
pub use error_code::MinerErrorCode;
pub use host_error::{EntityKind, HostError};
