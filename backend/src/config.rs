//! Configuration for the tuner and the instance registry
//!
//! Both structs deserialize from JSON with every field optional; missing
//! fields take the shipped defaults.

use serde::{Deserialize, Serialize};

use crate::rng::ShiftPair;

/// Increment used for records synthesized on a registry miss
pub const DEFAULT_INCREMENT: i64 = 1_442_695_040_888_963_407;

/// Offline tuner settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TunerConfig {
    /// Lower bound of `xor_base` candidates (upper bound is 3x)
    pub min_first: i32,
    /// Lower bound of `rot_base` candidates (upper bound is 3x)
    pub min_second: i32,
    /// One-bit draws per candidate
    pub sample_size: usize,
    /// Candidate budget: keep only the first N enumerated pairs
    pub max_candidates: Option<usize>,
}

impl Default for TunerConfig {
    fn default() -> Self {
        Self {
            min_first: 14,
            min_second: 15,
            sample_size: 1024,
            max_candidates: None,
        }
    }
}

impl TunerConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}

/// Fallback record template for ranges missing from the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub default_increment: i64,
    pub default_shift_pair: ShiftPair,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_increment: DEFAULT_INCREMENT,
            default_shift_pair: ShiftPair::DEFAULT,
        }
    }
}

impl RegistryConfig {
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
