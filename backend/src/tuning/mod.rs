//! Offline shift-pair tuning
//!
//! Grid-searches shift pairs for the one whose one-bit output is closest to
//! balanced, and packages results as persisted [`TuneResult`] records.
//!
//! Tuning is a batch operation: the default search costs 210 candidates x
//! 1024 draws. Run it at setup time, never on a draw path.

mod candidates;
mod result;
mod tuner;

pub use candidates::{static_tuning_candidates, STATIC_CANDIDATE_COUNT, STATIC_SCALING_FACTOR};
pub use result::{RangeKey, TuneResult};
pub use tuner::{generate_candidates, OfflineTuner, TuneError, MAX_CANDIDATE_BOUND};
