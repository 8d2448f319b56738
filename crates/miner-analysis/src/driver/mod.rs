//! Fixed-interval driver that re-runs snapshot scans.

pub mod poller;

pub use poller::{DriverError, PollStats, Poller, SnapshotSink};
