//! # miner-core
//!
//! Foundation crate for Meteor Miner.
//! Defines the record model, host capability traits, errors, config, events,
//! tracing setup, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::MinerConfig;
pub use errors::error_code::MinerErrorCode;
pub use errors::{CaptureError, ConfigError, HostError};
pub use events::handler::SnapshotEventHandler;
pub use traits::{HostCollection, HostEntry, HostObject, HostRegistries, RecordRead};
pub use types::collections::{FxHashMap, FxHashSet};
pub use types::host::{SubscriptionInfo, TemplateDef, ViewNode};
pub use types::record::{FieldValue, ParamValue, Record};
