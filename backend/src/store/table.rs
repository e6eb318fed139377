//! Tuning table document
//!
//! A table is a list of `(range, record)` entries plus a SHA-256 fingerprint
//! of those entries. Entries are kept sorted by range so the fingerprint does
//! not depend on insertion order.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::{HashMap, HashSet};

use super::StoreError;
use crate::tuning::{RangeKey, TuneResult};

/// One row of a tuning table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuneEntry {
    pub range: RangeKey,
    pub result: TuneResult,
}

/// Fingerprinted tuning table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TuneTable {
    /// SHA-256 of the canonical JSON of `entries` (hex)
    pub fingerprint: String,
    pub entries: Vec<TuneEntry>,
}

impl TuneTable {
    /// Build a table, sorting entries and computing the fingerprint
    pub fn new(mut entries: Vec<TuneEntry>) -> Result<Self, StoreError> {
        entries.sort_by_key(|entry| entry.range);
        check_unique(&entries)?;
        let fingerprint = compute_fingerprint(&entries)?;
        Ok(Self {
            fingerprint,
            entries,
        })
    }

    pub fn from_records(records: HashMap<RangeKey, TuneResult>) -> Result<Self, StoreError> {
        Self::new(
            records
                .into_iter()
                .map(|(range, result)| TuneEntry { range, result })
                .collect(),
        )
    }

    /// Insert or replace the record for `range`
    pub fn upsert(self, range: RangeKey, result: TuneResult) -> Result<Self, StoreError> {
        let mut entries: Vec<TuneEntry> = self
            .entries
            .into_iter()
            .filter(|entry| entry.range != range)
            .collect();
        entries.push(TuneEntry { range, result });
        Self::new(entries)
    }

    /// Parse and verify a table document
    ///
    /// # Errors
    /// - [`StoreError::Parse`] for malformed JSON
    /// - [`StoreError::DuplicateRange`] if a range repeats
    /// - [`StoreError::FingerprintMismatch`] if the entries were altered
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let mut table: TuneTable =
            serde_json::from_str(json).map_err(|e| StoreError::Parse(e.to_string()))?;
        table.entries.sort_by_key(|entry| entry.range);
        check_unique(&table.entries)?;

        let actual = compute_fingerprint(&table.entries)?;
        if actual != table.fingerprint {
            return Err(StoreError::FingerprintMismatch {
                expected: table.fingerprint,
                actual,
            });
        }
        Ok(table)
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string_pretty(self).map_err(|e| StoreError::Parse(e.to_string()))
    }

    pub fn records(&self) -> HashMap<RangeKey, TuneResult> {
        self.entries
            .iter()
            .map(|entry| (entry.range, entry.result))
            .collect()
    }
}

fn check_unique(entries: &[TuneEntry]) -> Result<(), StoreError> {
    let mut seen = HashSet::new();
    for entry in entries {
        if !seen.insert(entry.range) {
            return Err(StoreError::DuplicateRange(entry.range));
        }
    }
    Ok(())
}

/// Compute the SHA-256 fingerprint of table entries
///
/// Uses canonical JSON serialization with sorted keys so the hash only
/// depends on content.
pub fn compute_fingerprint(entries: &[TuneEntry]) -> Result<String, StoreError> {
    use serde_json::Value;
    use std::collections::BTreeMap;

    let value = serde_json::to_value(entries).map_err(|e| StoreError::Parse(e.to_string()))?;

    fn canonicalize(value: Value) -> Value {
        match value {
            Value::Object(map) => {
                let sorted: BTreeMap<String, Value> =
                    map.into_iter().map(|(k, v)| (k, canonicalize(v))).collect();
                Value::Object(sorted.into_iter().collect())
            }
            Value::Array(arr) => Value::Array(arr.into_iter().map(canonicalize).collect()),
            other => other,
        }
    }

    let json = serde_json::to_string(&canonicalize(value))
        .map_err(|e| StoreError::Parse(e.to_string()))?;

    let mut hasher = Sha256::new();
    hasher.update(json.as_bytes());
    Ok(format!("{:x}", hasher.finalize()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::ShiftPair;

    fn entry(start: i32, end: i32, seed: i64) -> TuneEntry {
        TuneEntry {
            range: RangeKey::new(start, end),
            result: TuneResult::new(seed, 3, ShiftPair::new(21, 18), 0.0078125),
        }
    }

    #[test]
    fn test_fingerprint_ignores_insertion_order() {
        let a = TuneTable::new(vec![entry(1, 6, 1), entry(0, 9, 2)]).unwrap();
        let b = TuneTable::new(vec![entry(0, 9, 2), entry(1, 6, 1)]).unwrap();
        assert_eq!(a.fingerprint, b.fingerprint);
        assert_eq!(a.entries[0].range, RangeKey::new(0, 9));
    }

    #[test]
    fn test_fingerprint_changes_with_content() {
        let a = TuneTable::new(vec![entry(1, 6, 1)]).unwrap();
        let b = TuneTable::new(vec![entry(1, 6, 2)]).unwrap();
        assert_ne!(a.fingerprint, b.fingerprint);
    }

    #[test]
    fn test_new_rejects_duplicates() {
        let err = TuneTable::new(vec![entry(1, 6, 1), entry(1, 6, 2)]).unwrap_err();
        assert_eq!(err, StoreError::DuplicateRange(RangeKey::new(1, 6)));
    }

    #[test]
    fn test_upsert_replaces() {
        let table = TuneTable::new(vec![entry(1, 6, 1)]).unwrap();
        let updated = table
            .upsert(
                RangeKey::new(1, 6),
                TuneResult::unscored(5, 7, ShiftPair::DEFAULT),
            )
            .unwrap();
        assert_eq!(updated.entries.len(), 1);
        assert_eq!(updated.entries[0].result.seed, 5);
    }

    #[test]
    fn test_tampered_table_rejected() {
        let table = TuneTable::new(vec![entry(1, 6, 1)]).unwrap();
        let json = table.to_json().unwrap().replace("\"seed\": 1", "\"seed\": 2");
        assert!(matches!(
            TuneTable::from_json(&json),
            Err(StoreError::FingerprintMismatch { .. })
        ));
    }

    #[test]
    fn test_json_round_trip_with_unscored_record() {
        let table = TuneTable::new(vec![TuneEntry {
            range: RangeKey::new(0, 1),
            result: TuneResult::unscored(9, 11, ShiftPair::DEFAULT),
        }])
        .unwrap();
        let back = TuneTable::from_json(&table.to_json().unwrap()).unwrap();
        assert_eq!(back.fingerprint, table.fingerprint);
        assert!(back.entries[0].result.score.is_infinite());
    }
}
