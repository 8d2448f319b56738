//! Observer hooks for snapshot scans. All methods default to no-ops.

use super::types::{EntrySkippedEvent, ScanCompleteEvent, ScanStartedEvent};

pub trait SnapshotEventHandler: Send + Sync {
    fn on_scan_started(&self, _event: &ScanStartedEvent) {}
    fn on_entry_skipped(&self, _event: &EntrySkippedEvent) {}
    fn on_scan_complete(&self, _event: &ScanCompleteEvent) {}
}

/// Handler that ignores everything.
pub struct NoOpHandler;

impl SnapshotEventHandler for NoOpHandler {}
