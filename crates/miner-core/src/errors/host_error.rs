//! Errors raised while reading the inspected application's registries.

use std::fmt;

use super::error_code::{self, MinerErrorCode};

/// Which kind of host entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Collection,
    Template,
    Subscription,
    View,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Collection => write!(f, "collection"),
            Self::Template => write!(f, "template"),
            Self::Subscription => write!(f, "subscription"),
            Self::View => write!(f, "view"),
        }
    }
}

/// Errors that can occur while reflecting over the host.
///
/// Only `MissingCapability` is fatal; everything else is contained to the
/// entity it names and the scan carries on without it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum HostError {
    #[error("host application not present: {reason}")]
    MissingCapability { reason: String },

    #[error("{kind} '{name}' vanished during scan")]
    Vanished { kind: EntityKind, name: String },

    #[error("record {index} of '{collection}' could not be enumerated: {reason}")]
    MalformedRecord {
        collection: String,
        index: usize,
        reason: String,
    },

    #[error("{registry} registry unavailable: {reason}")]
    RegistryUnavailable { registry: String, reason: String },
}

impl HostError {
    /// Whether this error should suppress the whole system rather than one entry.
    pub fn is_fatal(&self) -> bool {
        matches!(self, Self::MissingCapability { .. })
    }
}

impl MinerErrorCode for HostError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingCapability { .. } => error_code::HOST_MISSING,
            Self::Vanished { .. } => error_code::ENTITY_VANISHED,
            Self::MalformedRecord { .. } => error_code::MALFORMED_RECORD,
            Self::RegistryUnavailable { .. } => error_code::REGISTRY_UNAVAILABLE,
        }
    }
}
