//! Hash collections used throughout the workspace.

pub use rustc_hash::{FxHashMap, FxHashSet};
