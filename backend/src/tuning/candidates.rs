//! Static seed and increment candidates for sweeps
//!
//! Drawn from the pinned reference generator, so every build sweeps the
//! same 32 x 32 grid.

use crate::rng::{BitSource, ShiftPair, TunedRng, SEED_XOR};

/// Seeds (and increments) produced per set
pub const STATIC_CANDIDATE_COUNT: usize = 32;

/// Candidates are reduced modulo this before being forced odd
pub const STATIC_SCALING_FACTOR: i64 = 500_000;

/// Build the static `(seeds, increments)` candidate sets
///
/// Each round draws `v = (|next_long| % 500000) | 1`, offers `v` to the seed
/// set and `((v ^ 0xA5A5A5A5A5A5A5A5) % 500000) | 1` to the increment set.
/// Both sets keep insertion order and drop repeats.
pub fn static_tuning_candidates() -> (Vec<i64>, Vec<i64>) {
    let mut rng = TunedRng::new(0xDEAD_BEEF, 0xBEEF_DEAD, ShiftPair::new(4, 58));
    let mut seeds = Vec::with_capacity(STATIC_CANDIDATE_COUNT);
    let mut increments = Vec::with_capacity(STATIC_CANDIDATE_COUNT);

    while seeds.len() < STATIC_CANDIDATE_COUNT || increments.len() < STATIC_CANDIDATE_COUNT {
        let raw = rng.next_long().wrapping_abs();
        let value = (raw % STATIC_SCALING_FACTOR) | 1;
        let increment = ((value ^ SEED_XOR as i64) % STATIC_SCALING_FACTOR) | 1;

        if seeds.len() < STATIC_CANDIDATE_COUNT && !seeds.contains(&value) {
            seeds.push(value);
        }
        if increments.len() < STATIC_CANDIDATE_COUNT && !increments.contains(&increment) {
            increments.push(increment);
        }
    }

    (seeds, increments)
}
