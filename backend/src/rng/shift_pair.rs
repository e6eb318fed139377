//! Shift pairs and shift-pair selection
//!
//! A shift pair `(xor_base, rot_base)` is the only tunable input of the
//! mixing network. Every per-draw shift amount is derived from it through
//! two fixed offset tables and clamped into `[0, 63]`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::tuning::OfflineTuner;

/// Offsets added to `xor_base` (low, low, mid, mid, high, high)
const XOR_OFFSETS: [i32; 6] = [0, 10, 11, 21, 32, 42];

/// Offsets subtracted from `rot_base` (low, low, mid, mid, high, high)
const ROT_OFFSETS: [i32; 6] = [42, 52, 31, 41, 0, 10];

/// The two tunable integers every shift amount is derived from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShiftPair {
    pub xor_base: i32,
    pub rot_base: i32,
}

impl ShiftPair {
    /// Shipped default pair
    pub const DEFAULT: ShiftPair = ShiftPair::new(18, 54);

    /// Sentinel requesting the shipped default
    pub const USE_DEFAULT: ShiftPair = ShiftPair::new(0, 0);

    /// Sentinel requesting an offline search at construction time
    pub const TUNE: ShiftPair = ShiftPair::new(1, 1);

    pub const fn new(xor_base: i32, rot_base: i32) -> Self {
        Self { xor_base, rot_base }
    }
}

impl From<(i32, i32)> for ShiftPair {
    fn from((xor_base, rot_base): (i32, i32)) -> Self {
        Self::new(xor_base, rot_base)
    }
}

impl fmt::Display for ShiftPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.xor_base, self.rot_base)
    }
}

/// The twelve clamped shift amounts derived from a [`ShiftPair`]
///
/// `xor[2k]`/`xor[2k + 1]` shift the state and the entropy word for band
/// `k` (low, mid, high); `rot` follows the same layout for the rotate
/// amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShiftTable {
    pub xor: [u32; 6],
    pub rot: [u32; 6],
}

impl ShiftTable {
    pub fn from_pair(pair: ShiftPair) -> Self {
        Self {
            xor: XOR_OFFSETS.map(|offset| clamp_shift(pair.xor_base.saturating_add(offset))),
            rot: ROT_OFFSETS.map(|offset| clamp_shift(pair.rot_base.saturating_sub(offset))),
        }
    }
}

fn clamp_shift(amount: i32) -> u32 {
    amount.clamp(0, 63) as u32
}

/// Resolve a requested pair into the pair a generator will use
///
/// - `(0, 0)` selects [`ShiftPair::DEFAULT`]
/// - `(1, 1)` runs the offline search for `(seed, increment)`
/// - anything else is returned unchanged
///
/// # Example
/// ```
/// use tuned_rng_core_rs::rng::{resolve_shift_pair, ShiftPair};
///
/// assert_eq!(resolve_shift_pair(ShiftPair::new(0, 0), 7, 9), ShiftPair::new(18, 54));
/// assert_eq!(resolve_shift_pair(ShiftPair::new(4, 58), 7, 9), ShiftPair::new(4, 58));
/// ```
pub fn resolve_shift_pair(requested: ShiftPair, seed: i64, increment: i64) -> ShiftPair {
    match requested {
        ShiftPair::USE_DEFAULT => ShiftPair::DEFAULT,
        ShiftPair::TUNE => OfflineTuner::default().find_best_shift_pair(seed, increment),
        explicit => explicit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_table() {
        let table = ShiftTable::from_pair(ShiftPair::DEFAULT);
        assert_eq!(table.xor, [18, 28, 29, 39, 50, 60]);
        assert_eq!(table.rot, [12, 2, 23, 13, 54, 44]);
    }

    #[test]
    fn test_table_clamps_both_ends() {
        let table = ShiftTable::from_pair(ShiftPair::new(40, 5));
        assert_eq!(table.xor, [40, 50, 51, 61, 63, 63]);
        assert_eq!(table.rot, [0, 0, 0, 0, 5, 0]);
    }

    #[test]
    fn test_extreme_pair_does_not_overflow() {
        let table = ShiftTable::from_pair(ShiftPair::new(i32::MAX, i32::MIN));
        assert!(table.xor.iter().all(|&s| s == 63));
        assert!(table.rot.iter().all(|&s| s == 0));
    }

    #[test]
    fn test_resolve_sentinels() {
        assert_eq!(
            resolve_shift_pair(ShiftPair::USE_DEFAULT, 1, 3),
            ShiftPair::DEFAULT
        );
        assert_eq!(
            resolve_shift_pair(ShiftPair::new(0, 1), 1, 3),
            ShiftPair::new(0, 1)
        );
        assert_eq!(
            resolve_shift_pair(ShiftPair::new(-5, 99), 1, 3),
            ShiftPair::new(-5, 99)
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(ShiftPair::DEFAULT.to_string(), "(18, 54)");
    }
}
