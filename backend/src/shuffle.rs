//! Swap-count shuffle
//!
//! Repeatedly draws two indices and swaps them when they differ, stopping
//! after exactly `len` successful swaps. The output distribution is not
//! uniform over permutations; the procedure is kept as-is so that shuffles
//! seeded from a persisted tuning record replay identically.

use crate::rng::{BitSource, RngError};

/// Return a shuffled copy of `items`
///
/// Sequences shorter than two elements are returned unchanged without
/// drawing.
///
/// # Errors
/// [`RngError::InvalidIntRange`] if `items` is longer than `i32::MAX`.
///
/// # Example
/// ```
/// use tuned_rng_core_rs::{shuffle, ShiftPair, TunedRng};
///
/// let mut rng = TunedRng::new(7, 11, ShiftPair::DEFAULT);
/// let mut shuffled = shuffle(&[1, 2, 3, 4, 5], &mut rng).unwrap();
/// shuffled.sort();
/// assert_eq!(shuffled, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T: Clone, R: BitSource + ?Sized>(
    items: &[T],
    rng: &mut R,
) -> Result<Vec<T>, RngError> {
    let mut shuffled = items.to_vec();
    if shuffled.len() < 2 {
        return Ok(shuffled);
    }

    let len = i32::try_from(shuffled.len()).map_err(|_| RngError::InvalidIntRange {
        from: 0,
        until: items.len() as i64,
    })?;

    let mut swaps = 0;
    while swaps < shuffled.len() {
        let first = rng.next_int_until(len)? as usize;
        let second = rng.next_int_until(len)? as usize;
        if first != second {
            shuffled.swap(first, second);
            swaps += 1;
        }
    }
    Ok(shuffled)
}
