//! Tuning records and the ranges they are keyed by

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

use crate::rng::{ShiftPair, TunedRng};

/// Inclusive integer output range a generator is dedicated to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct RangeKey {
    pub start: i32,
    pub end: i32,
}

impl RangeKey {
    pub const fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, value: i32) -> bool {
        self.start <= value && value <= self.end
    }
}

impl From<RangeInclusive<i32>> for RangeKey {
    fn from(range: RangeInclusive<i32>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}

impl fmt::Display for RangeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..={}", self.start, self.end)
    }
}

impl FromStr for RangeKey {
    type Err = String;

    /// Parses `start..=end`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (start, end) = s
            .split_once("..=")
            .ok_or_else(|| format!("expected START..=END, got '{}'", s))?;
        let start = start
            .trim()
            .parse()
            .map_err(|e| format!("invalid range start '{}': {}", start, e))?;
        let end = end
            .trim()
            .parse()
            .map_err(|e| format!("invalid range end '{}': {}", end, e))?;
        Ok(Self::new(start, end))
    }
}

/// Persisted tuning record
///
/// `score` is the bias of the tuned pair, lower is better. Records that
/// were never scored carry `f64::INFINITY`, stored as JSON `null`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TuneResult {
    pub seed: i64,
    pub increment: i64,
    pub shift_pair: ShiftPair,
    #[serde(
        serialize_with = "serialize_score",
        deserialize_with = "deserialize_score"
    )]
    pub score: f64,
}

impl TuneResult {
    pub fn new(seed: i64, increment: i64, shift_pair: ShiftPair, score: f64) -> Self {
        Self {
            seed,
            increment,
            shift_pair,
            score,
        }
    }

    /// Unscored record, used when nothing better is known
    pub fn unscored(seed: i64, increment: i64, shift_pair: ShiftPair) -> Self {
        Self::new(seed, increment, shift_pair, f64::INFINITY)
    }

    /// Rebuild the generator this record describes
    pub fn build(&self) -> TunedRng {
        TunedRng::new(self.seed, self.increment, self.shift_pair)
    }
}

fn serialize_score<S: Serializer>(score: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    if score.is_finite() {
        serializer.serialize_some(score)
    } else {
        serializer.serialize_none()
    }
}

fn deserialize_score<'de, D: Deserializer<'de>>(deserializer: D) -> Result<f64, D::Error> {
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(f64::INFINITY))
}
