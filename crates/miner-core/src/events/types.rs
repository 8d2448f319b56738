//! Payloads passed to [`super::handler::SnapshotEventHandler`].

use chrono::{DateTime, Utc};

use crate::errors::{EntityKind, HostError};

#[derive(Debug, Clone)]
pub struct ScanStartedEvent {
    pub started_at: DateTime<Utc>,
}

/// An entity left out of a snapshot because reading it failed.
#[derive(Debug, Clone)]
pub struct EntrySkippedEvent {
    pub kind: EntityKind,
    pub name: String,
    pub error: HostError,
}

#[derive(Debug, Clone)]
pub struct ScanCompleteEvent {
    pub collections: usize,
    pub templates: usize,
    pub subscriptions: usize,
    pub skipped: usize,
    pub duration_ms: u64,
}
