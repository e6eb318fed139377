//! The generator contract
//!
//! Implementors supply one primitive, a full 32-bit output word. Every
//! other draw is layered on it, so each draw advances the underlying state
//! a fixed number of times (one word, two for `next_long`/`next_double`).

use super::RngError;

/// `2^53` as a float: the number of distinct `next_double` outcomes
const DOUBLE_UNIT: f64 = (1u64 << 53) as f64;

/// Random source capability set
///
/// # Example
/// ```
/// use tuned_rng_core_rs::{BitSource, ShiftPair, TunedRng};
///
/// let mut rng = TunedRng::new(12345, 1442695040888963407, ShiftPair::DEFAULT);
/// let die = rng.next_int_range(1, 7).unwrap();
/// assert!((1..7).contains(&die));
///
/// let p = rng.next_double();
/// assert!((0.0..1.0).contains(&p));
/// ```
pub trait BitSource {
    /// Advance the state once and return the full 32-bit output word
    fn next_word(&mut self) -> u32;

    /// Low `bit_count` bits of the next word
    ///
    /// # Errors
    /// [`RngError::InvalidBitCount`] unless `1 <= bit_count <= 32`.
    fn next_bits(&mut self, bit_count: u32) -> Result<u32, RngError> {
        if !(1..=32).contains(&bit_count) {
            return Err(RngError::InvalidBitCount(bit_count));
        }
        Ok(take_bits(self.next_word(), bit_count))
    }

    /// Full 32-bit word reinterpreted as a signed integer
    fn next_int(&mut self) -> i32 {
        self.next_word() as i32
    }

    /// Value in `[0, until)`
    fn next_int_until(&mut self, until: i32) -> Result<i32, RngError> {
        self.next_int_range(0, until)
    }

    /// Value in `[from, until)`
    ///
    /// Reduces a 31-bit draw modulo the span, so spans that are not powers
    /// of two carry a slight bias toward their low end.
    ///
    /// # Errors
    /// [`RngError::InvalidIntRange`] if `from >= until`.
    fn next_int_range(&mut self, from: i32, until: i32) -> Result<i32, RngError> {
        if from >= until {
            return Err(RngError::InvalidIntRange {
                from: from as i64,
                until: until as i64,
            });
        }
        let span = until as i64 - from as i64;
        let drawn = take_bits(self.next_word(), 31) as i64;
        Ok((from as i64 + drawn % span) as i32)
    }

    /// High word first, then low word
    ///
    /// Both words are sign-extended before they are combined, so a low word
    /// with its top bit set fills the high half with ones.
    fn next_long(&mut self) -> i64 {
        let high = self.next_word() as i32 as i64;
        let low = self.next_word() as i32 as i64;
        (high << 32) | low
    }

    fn next_boolean(&mut self) -> bool {
        take_bits(self.next_word(), 1) != 0
    }

    /// Value in `[0, 1)` with 53 bits of precision
    fn next_double(&mut self) -> f64 {
        let high = take_bits(self.next_word(), 26) as u64;
        let low = take_bits(self.next_word(), 27) as u64;
        ((high << 27) | low) as f64 / DOUBLE_UNIT
    }

    /// Value in `[from, until)`
    ///
    /// # Errors
    /// [`RngError::InvalidDoubleRange`] unless both bounds are finite and
    /// `from < until`.
    fn next_double_range(&mut self, from: f64, until: f64) -> Result<f64, RngError> {
        if !(from < until) || !from.is_finite() || !until.is_finite() {
            return Err(RngError::InvalidDoubleRange { from, until });
        }
        let unit = self.next_double();
        let span = until - from;
        let value = if span.is_finite() {
            from + span * unit
        } else {
            let half = until / 2.0 - from / 2.0;
            from + half * unit + half * unit
        };
        // Rounding can land exactly on `until` when the span is a few ulps wide
        if value >= until {
            Ok(next_down(until).max(from))
        } else {
            Ok(value)
        }
    }
}

fn take_bits(word: u32, bit_count: u32) -> u32 {
    if bit_count >= 32 {
        word
    } else {
        word & ((1u32 << bit_count) - 1)
    }
}

/// Largest float strictly below `x` (finite, non-NaN input)
fn next_down(x: f64) -> f64 {
    if x == 0.0 {
        -f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() - 1)
    } else {
        f64::from_bits(x.to_bits() + 1)
    }
}
