//! Frequency table of record shapes within one collection.

use miner_core::constants::SHAPE_KEY_SEPARATOR;
use miner_core::FxHashMap;
use serde::ser::{Serialize, SerializeSeq, Serializer};

use crate::shape::FieldSignature;

/// One bucket: a signature and how many records carried it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ShapeCount {
    pub signature: FieldSignature,
    pub count: usize,
}

/// Signature → record count, for one collection at one scan.
///
/// Buckets are keyed by the signature itself, so a field name containing the
/// key separator never merges two different shapes. Iteration order is
/// unspecified; use [`ShapeFrequencyTable::sorted`] when order matters.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ShapeFrequencyTable {
    shapes: FxHashMap<FieldSignature, usize>,
}

impl ShapeFrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more record with this signature.
    pub fn record(&mut self, signature: FieldSignature) {
        *self.shapes.entry(signature).or_insert(0) += 1;
    }

    /// Count for a signature, if any record had it.
    pub fn count_of(&self, signature: &FieldSignature) -> Option<usize> {
        self.shapes.get(signature).copied()
    }

    /// Count for a canonical key. The key is split back into paths, so this
    /// cannot address fields whose names contain the separator; use
    /// [`ShapeFrequencyTable::count_of`] for those.
    pub fn get(&self, key: &str) -> Option<usize> {
        let paths = key.split(SHAPE_KEY_SEPARATOR).filter(|p| !p.is_empty());
        self.count_of(&FieldSignature::from_paths(paths))
    }

    /// Number of distinct shapes.
    pub fn distinct_shapes(&self) -> usize {
        self.shapes.len()
    }

    /// Records counted across every shape.
    pub fn total(&self) -> usize {
        self.shapes.values().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Exactly one shape across all counted records.
    pub fn is_uniform(&self) -> bool {
        self.shapes.len() == 1
    }

    /// Two or more distinct shapes.
    pub fn is_non_uniform(&self) -> bool {
        self.shapes.len() >= 2
    }

    pub fn iter(&self) -> impl Iterator<Item = ShapeCount> + '_ {
        self.shapes.iter().map(|(signature, &count)| ShapeCount {
            signature: signature.clone(),
            count,
        })
    }

    /// Entries ordered by signature.
    pub fn sorted(&self) -> Vec<ShapeCount> {
        let mut entries: Vec<_> = self.iter().collect();
        entries.sort_by(|a, b| a.signature.cmp(&b.signature));
        entries
    }
}

impl Serialize for ShapeFrequencyTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let ordered = self.sorted();
        let mut seq = serializer.serialize_seq(Some(ordered.len()))?;
        for shape in &ordered {
            seq.serialize_element(shape)?;
        }
        seq.end()
    }
}
