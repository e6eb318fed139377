//! Tests for deterministic generation
//!
//! CRITICAL: Same seed, increment and shift pair MUST produce the same sequence.

use proptest::prelude::*;
use tuned_rng_core_rs::rng::mix_seed;
use tuned_rng_core_rs::{BitSource, ShiftPair, TunedRng};

const SEED: i64 = 0xDEAD_BEEF;
const INCREMENT: i64 = 0xBEEF_DEAD;

fn reference() -> TunedRng {
    TunedRng::new(SEED, INCREMENT, ShiftPair::new(4, 58))
}

#[test]
fn test_pinned_first_long() {
    let mut rng = reference();
    assert_eq!(rng.next_long(), -2_156_791_965_717_710_633);
}

#[test]
fn test_pinned_words_through_next_bits() {
    let mut rng = reference();
    assert_eq!(rng.next_bits(32).unwrap(), 3_792_800_034);
    assert_eq!(rng.next_bits(32).unwrap(), 1_694_152_919);
    // 1928695443 & 0xFF
    assert_eq!(rng.next_bits(8).unwrap(), 0x93);
}

#[test]
fn test_next_int_matches_word_bits() {
    let mut a = reference();
    let mut b = reference();
    for _ in 0..100 {
        assert_eq!(a.next_int() as u32, b.next_bits(32).unwrap());
    }
}

#[test]
fn test_different_seeds_different_sequences() {
    let mut rng1 = TunedRng::new(12345, INCREMENT, ShiftPair::DEFAULT);
    let mut rng2 = TunedRng::new(54321, INCREMENT, ShiftPair::DEFAULT);

    let first: Vec<u32> = (0..8).map(|_| rng1.next_word()).collect();
    let second: Vec<u32> = (0..8).map(|_| rng2.next_word()).collect();
    assert_ne!(first, second, "Different seeds should produce different values");
}

#[test]
fn test_different_shift_pairs_different_sequences() {
    let mut rng1 = TunedRng::new(SEED, INCREMENT, ShiftPair::DEFAULT);
    let mut rng2 = TunedRng::new(SEED, INCREMENT, ShiftPair::new(21, 18));

    let first: Vec<u32> = (0..8).map(|_| rng1.next_word()).collect();
    let second: Vec<u32> = (0..8).map(|_| rng2.next_word()).collect();
    assert_ne!(first, second);
}

#[test]
fn test_rng_produces_diverse_values() {
    let mut rng = reference();
    let unique_count = (0..100)
        .map(|_| rng.next_long())
        .collect::<std::collections::HashSet<_>>()
        .len();
    assert!(
        unique_count > 90,
        "RNG not diverse enough: only {} unique values out of 100",
        unique_count
    );
}

#[test]
fn test_replay_from_checkpoint() {
    let mut rng1 = reference();
    for _ in 0..10 {
        rng1.next_word();
    }
    let checkpoint = rng1.clone();

    let mut rng2 = checkpoint;
    for i in 0..50 {
        assert_eq!(
            rng1.next_long(),
            rng2.next_long(),
            "Replay diverged at draw {}",
            i
        );
    }
}

proptest! {
    #[test]
    fn prop_same_inputs_same_sequence(
        seed in any::<i64>(),
        increment in any::<i64>(),
        xor_base in 2i32..64,
        rot_base in 2i32..64,
    ) {
        let pair = ShiftPair::new(xor_base, rot_base);
        let mut a = TunedRng::new(seed, increment, pair);
        let mut b = TunedRng::new(seed, increment, pair);

        for _ in 0..32 {
            prop_assert_eq!(a.next_bits(17).unwrap(), b.next_bits(17).unwrap());
            prop_assert_eq!(a.next_int_range(-5, 5).unwrap(), b.next_int_range(-5, 5).unwrap());
            prop_assert_eq!(a.next_long(), b.next_long());
        }
    }

    #[test]
    fn prop_derived_increment_is_odd(seed in any::<i64>(), increment in any::<i64>()) {
        let constants = mix_seed(seed, increment);
        prop_assert_eq!(constants.increment & 1, 1);
        prop_assert_eq!(TunedRng::new(seed, increment, ShiftPair::DEFAULT).increment(), constants.increment);
    }
}
