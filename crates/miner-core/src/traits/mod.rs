//! Capability traits the host application is read through.

pub mod host;

pub use host::{HostCollection, HostEntry, HostObject, HostRegistries, RecordRead};
