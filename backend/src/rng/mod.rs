//! Tunable deterministic random bit generation
//!
//! A [`TunedRng`] advances a 64-bit linear-congruential state and folds it
//! through a three-band masked xor/rotate network into a 32-bit word. The
//! shape of that network is controlled by a [`ShiftPair`], which can be the
//! shipped default, an explicit pair restored from a tuning table, or the
//! result of an offline search (see [`crate::tuning`]).
//!
//! NOT cryptographically secure. Only statistical bit balance is tuned.

mod seed;
mod shift_pair;
mod source;
mod tuned;

pub use seed::{clock_increment, clock_seed, mix_seed, StreamConstants, SEED_XOR};
pub use shift_pair::{resolve_shift_pair, ShiftPair, ShiftTable};
pub use source::BitSource;
pub use tuned::{TunedRng, MULTIPLIER};

use thiserror::Error;

/// Fixed window filters shared by every generator instance
pub const LOWER_FILTER: u64 = 0xCAFE_BABE_CAFE_BABE;
pub const MID_FILTER: u64 = 0xFEED_FACE_FEED_FACE;
pub const HIGHER_FILTER: u64 = 0xDEAD_BEEF_DEAD_BEEF;
pub const GOLDEN: u64 = 0x9E37_79B9_7F4A_7C15;

/// Precondition violations raised by draws
#[derive(Debug, Error, PartialEq)]
pub enum RngError {
    #[error("bit count must be between 1 and 32, got {0}")]
    InvalidBitCount(u32),

    #[error("until must be greater than from (from {from}, until {until})")]
    InvalidIntRange { from: i64, until: i64 },

    #[error("until must be greater than from (from {from}, until {until})")]
    InvalidDoubleRange { from: f64, until: f64 },
}
