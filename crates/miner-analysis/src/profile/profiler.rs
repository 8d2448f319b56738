//! Groups a collection's records by signature.

use miner_core::errors::HostError;
use miner_core::{Record, RecordRead};

use super::table::ShapeFrequencyTable;
use crate::shape::ShapeInferencer;

/// Result of profiling a fallible read: the table plus the records left out.
#[derive(Debug, Clone, Default)]
pub struct ProfileOutcome {
    pub table: ShapeFrequencyTable,
    pub malformed: Vec<HostError>,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionProfiler {
    inferencer: ShapeInferencer,
}

impl CollectionProfiler {
    pub fn new(inferencer: ShapeInferencer) -> Self {
        Self { inferencer }
    }

    pub fn inferencer(&self) -> &ShapeInferencer {
        &self.inferencer
    }

    /// Bucket records by signature. An empty slice gives an empty table.
    pub fn profile(&self, records: &[Record]) -> ShapeFrequencyTable {
        let mut table = ShapeFrequencyTable::new();
        for record in records {
            table.record(self.inferencer.signature(record));
        }
        table
    }

    /// Like [`Self::profile`], but over a host read where individual records
    /// may have failed. Failed records are excluded from the counts.
    pub fn profile_reads<I>(&self, reads: I) -> ProfileOutcome
    where
        I: IntoIterator<Item = RecordRead>,
    {
        let mut outcome = ProfileOutcome::default();
        for read in reads {
            match read {
                Ok(record) => outcome.table.record(self.inferencer.signature(&record)),
                Err(e) => outcome.malformed.push(e),
            }
        }
        outcome
    }
}

/// Profile with the default depth.
pub fn profile(records: &[Record]) -> ShapeFrequencyTable {
    CollectionProfiler::default().profile(records)
}
