//! Collection profiling: bucketing records by field signature.

pub mod profiler;
pub mod table;

pub use profiler::{profile, CollectionProfiler, ProfileOutcome};
pub use table::{ShapeCount, ShapeFrequencyTable};
