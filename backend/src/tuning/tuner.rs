//! Grid search over shift pairs
//!
//! Candidates are enumerated in a fixed order and each one is scored by
//! drawing one-bit samples from a scratch generator:
//!
//! ```text
//! bias = |0.5 - ones / sample_size|
//! ```
//!
//! The lowest bias wins; ties keep the first candidate seen. Scratch
//! generators are private to each call, so a tuner can be shared across
//! threads and run for different `(seed, increment)` pairs concurrently.

use thiserror::Error;

use super::result::TuneResult;
use crate::config::TunerConfig;
use crate::rng::{BitSource, ShiftPair, TunedRng};

/// Errors that can occur when configuring the tuner
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TuneError {
    #[error("no shift-pair candidates for min_first={min_first}, min_second={min_second} within budget")]
    NoCandidates { min_first: i32, min_second: i32 },

    #[error("candidate bounds min_first={min_first}, min_second={min_second} exceed the candidate bound")]
    BoundsOutOfRange { min_first: i32, min_second: i32 },

    #[error("sample size must be positive")]
    InvalidSampleSize,
}

/// Largest accepted `|min_first|` / `|min_second|`
///
/// Shift amounts clamp to `[0, 63]`, so pairs past this bound only repeat
/// shift tables already covered.
pub const MAX_CANDIDATE_BOUND: i32 = 256;

/// Enumerate candidate shift pairs
///
/// `xor_base` runs ascending over `[min_first, 3 * min_first]` and, for
/// each, `rot_base` runs descending over `[min_second, 3 * min_second]`.
/// A pair is kept when `xor_base + 9` is even and `rot_base - 37` is odd.
///
/// # Example
/// ```
/// use tuned_rng_core_rs::tuning::generate_candidates;
/// use tuned_rng_core_rs::ShiftPair;
///
/// let candidates = generate_candidates(14, 15);
/// assert_eq!(candidates.len(), 210);
/// assert_eq!(candidates[0], ShiftPair::new(15, 44));
/// ```
pub fn generate_candidates(min_first: i32, min_second: i32) -> Vec<ShiftPair> {
    let upper = |min: i32| (3 * min as i64).min(i32::MAX as i64);

    let mut pairs = Vec::new();
    for first in min_first as i64..=upper(min_first) {
        for second in (min_second as i64..=upper(min_second)).rev() {
            if (first + 9).rem_euclid(2) == 0 && (second - 37).rem_euclid(2) == 1 {
                pairs.push(ShiftPair::new(first as i32, second as i32));
            }
        }
    }
    pairs
}

/// Offline shift-pair search
#[derive(Debug, Clone)]
pub struct OfflineTuner {
    config: TunerConfig,
    candidates: Vec<ShiftPair>,
}

impl Default for OfflineTuner {
    fn default() -> Self {
        let config = TunerConfig::default();
        let candidates = generate_candidates(config.min_first, config.min_second);
        Self { config, candidates }
    }
}

impl OfflineTuner {
    /// Build a tuner, enumerating candidates up front
    ///
    /// # Errors
    /// - [`TuneError::InvalidSampleSize`] for a zero sample size
    /// - [`TuneError::BoundsOutOfRange`] if either bound's magnitude exceeds
    ///   [`MAX_CANDIDATE_BOUND`]
    /// - [`TuneError::NoCandidates`] if the bounds or budget leave nothing to score
    pub fn new(config: TunerConfig) -> Result<Self, TuneError> {
        if config.sample_size == 0 {
            return Err(TuneError::InvalidSampleSize);
        }
        if config.min_first.unsigned_abs() > MAX_CANDIDATE_BOUND as u32
            || config.min_second.unsigned_abs() > MAX_CANDIDATE_BOUND as u32
        {
            return Err(TuneError::BoundsOutOfRange {
                min_first: config.min_first,
                min_second: config.min_second,
            });
        }

        let mut candidates = generate_candidates(config.min_first, config.min_second);
        if let Some(budget) = config.max_candidates {
            candidates.truncate(budget);
        }
        if candidates.is_empty() {
            return Err(TuneError::NoCandidates {
                min_first: config.min_first,
                min_second: config.min_second,
            });
        }

        Ok(Self { config, candidates })
    }

    pub fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// Candidates in scoring order
    pub fn candidates(&self) -> &[ShiftPair] {
        &self.candidates
    }

    /// Bias of `pair` for `(seed, increment)`, lower is better
    pub fn score(&self, seed: i64, increment: i64, pair: ShiftPair) -> f64 {
        let mut rng = TunedRng::new(seed, increment, pair);
        let ones: usize = (0..self.config.sample_size)
            .map(|_| rng.next_word() as usize & 1)
            .sum();

        (0.5 - ones as f64 / self.config.sample_size as f64).abs()
    }

    /// Lowest-bias candidate and its score
    fn best(&self, seed: i64, increment: i64) -> (ShiftPair, f64) {
        assert!(
            !self.candidates.is_empty(),
            "tuner must hold at least one candidate"
        );

        let mut best_pair = self.candidates[0];
        let mut best_score = f64::INFINITY;
        for &pair in &self.candidates {
            let score = self.score(seed, increment, pair);
            if score < best_score {
                best_score = score;
                best_pair = pair;
            }
        }
        (best_pair, best_score)
    }

    /// Lowest-bias candidate for `(seed, increment)`
    pub fn find_best_shift_pair(&self, seed: i64, increment: i64) -> ShiftPair {
        self.best(seed, increment).0
    }

    /// Tune `(seed, increment)` into a full record
    pub fn tune(&self, seed: i64, increment: i64) -> TuneResult {
        let (pair, score) = self.best(seed, increment);
        TuneResult::new(seed, increment, pair, score)
    }

    /// Tune every `(seed, increment)` combination and keep the best record
    ///
    /// Seeds are the outer loop. Returns `None` if either list is empty.
    pub fn sweep(&self, seeds: &[i64], increments: &[i64]) -> Option<TuneResult> {
        let mut best: Option<TuneResult> = None;
        for &seed in seeds {
            for &increment in increments {
                let result = self.tune(seed, increment);
                if best.map_or(true, |current| result.score < current.score) {
                    best = Some(result);
                }
            }
        }
        best
    }
}
