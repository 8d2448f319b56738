//! Snapshot reporting: one immutable picture of the host per scan.

pub mod detail;
pub mod diff;
pub mod reporter;
pub mod types;

pub use detail::{plural, CollectionDetail, ShapeLine};
pub use diff::{CollectionChange, RenderState, SnapshotDiff};
pub use reporter::SnapshotReporter;
pub use types::{CollectionSnapshot, FullSnapshot, SubscriptionSnapshot, TemplateSnapshot};
