//! File-backed store reading a [`TuneTable`] JSON document

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{StoreError, TuneStore, TuneTable};
use crate::tuning::{RangeKey, TuneResult};

/// Reads tuning records from a JSON tuning table on disk
///
/// A missing file is treated as an empty table; any other read failure,
/// malformed content or fingerprint mismatch is an error.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and verify the whole table
    pub fn read_table(&self) -> Result<TuneTable, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => TuneTable::from_json(&content),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => TuneTable::new(Vec::new()),
            Err(e) => Err(StoreError::Io {
                path: self.path.display().to_string(),
                reason: e.to_string(),
            }),
        }
    }
}

impl TuneStore for JsonFileStore {
    fn load(&self) -> Result<HashMap<RangeKey, TuneResult>, StoreError> {
        Ok(self.read_table()?.records())
    }
}
