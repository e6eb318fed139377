//! Persisted tuning records
//!
//! The registry only ever reads tuning records. Where they live is up to
//! the host: [`MemoryTuneStore`] keeps them in process, [`JsonFileStore`]
//! reads a fingerprinted [`TuneTable`] document from disk.

mod json_file;
mod table;

pub use json_file::JsonFileStore;
pub use table::{compute_fingerprint, TuneEntry, TuneTable};

use std::collections::HashMap;
use thiserror::Error;

use crate::tuning::{RangeKey, TuneResult};

/// Errors that can occur while loading tuning records
#[derive(Debug, Error, PartialEq)]
pub enum StoreError {
    #[error("failed to read {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("malformed tuning table: {0}")]
    Parse(String),

    #[error("tuning table fingerprint mismatch: expected {expected}, computed {actual}")]
    FingerprintMismatch { expected: String, actual: String },

    #[error("range {0} appears more than once in tuning table")]
    DuplicateRange(RangeKey),
}

/// Read side of a persisted tuning store
pub trait TuneStore: Send + Sync {
    fn load(&self) -> Result<HashMap<RangeKey, TuneResult>, StoreError>;
}

/// In-process store
#[derive(Debug, Clone, Default)]
pub struct MemoryTuneStore {
    records: HashMap<RangeKey, TuneResult>,
}

impl MemoryTuneStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, range: RangeKey, record: TuneResult) -> Self {
        self.records.insert(range, record);
        self
    }

    pub fn insert(&mut self, range: RangeKey, record: TuneResult) {
        self.records.insert(range, record);
    }
}

impl From<HashMap<RangeKey, TuneResult>> for MemoryTuneStore {
    fn from(records: HashMap<RangeKey, TuneResult>) -> Self {
        Self { records }
    }
}

impl TuneStore for MemoryTuneStore {
    fn load(&self) -> Result<HashMap<RangeKey, TuneResult>, StoreError> {
        Ok(self.records.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ShiftPair;

    #[test]
    fn test_memory_store_returns_records() {
        let record = TuneResult::new(1, 3, ShiftPair::new(21, 18), 0.01);
        let store = MemoryTuneStore::new().with_record(RangeKey::new(1, 6), record);

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[&RangeKey::new(1, 6)], record);
    }

    #[test]
    fn test_error_display() {
        let err = StoreError::DuplicateRange(RangeKey::new(1, 6));
        assert_eq!(
            err.to_string(),
            "range 1..=6 appears more than once in tuning table"
        );
    }
}
