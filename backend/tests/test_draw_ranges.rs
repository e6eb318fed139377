//! Range validity and interval containment of derived draws

use proptest::prelude::*;
use tuned_rng_core_rs::{BitSource, RngError, ShiftPair, TunedRng};

fn rng(seed: i64) -> TunedRng {
    TunedRng::new(seed, 1_442_695_040_888_963_407, ShiftPair::DEFAULT)
}

fn next_up(x: f64) -> f64 {
    if x == 0.0 {
        f64::from_bits(1)
    } else if x > 0.0 {
        f64::from_bits(x.to_bits() + 1)
    } else {
        f64::from_bits(x.to_bits() - 1)
    }
}

#[test]
fn test_every_bit_count_in_range() {
    let mut rng = rng(7);
    for bit_count in 1..=32u32 {
        for _ in 0..200 {
            let value = rng.next_bits(bit_count).unwrap() as u64;
            assert!(
                value < 1u64 << bit_count,
                "next_bits({}) produced {}",
                bit_count,
                value
            );
        }
    }
}

#[test]
fn test_invalid_bit_counts() {
    let mut rng = rng(7);
    let before = rng.state();
    assert_eq!(rng.next_bits(0), Err(RngError::InvalidBitCount(0)));
    assert_eq!(rng.next_bits(33), Err(RngError::InvalidBitCount(33)));
    assert_eq!(rng.state(), before, "rejected draws must not advance state");
}

#[test]
fn test_single_value_range() {
    let mut rng = rng(7);
    for _ in 0..20 {
        assert_eq!(rng.next_int_range(5, 6).unwrap(), 5);
    }
}

#[test]
fn test_inverted_ranges_rejected() {
    let mut rng = rng(7);
    assert_eq!(
        rng.next_int_range(10, 3),
        Err(RngError::InvalidIntRange { from: 10, until: 3 })
    );
    assert!(matches!(
        rng.next_int_until(-1),
        Err(RngError::InvalidIntRange { .. })
    ));
    assert!(matches!(
        rng.next_double_range(1.0, 1.0),
        Err(RngError::InvalidDoubleRange { .. })
    ));
}

#[test]
fn test_booleans_take_both_values() {
    let mut rng = rng(7);
    let trues = (0..1000).filter(|_| rng.next_boolean()).count();
    assert!(trues > 350 && trues < 650, "{} trues out of 1000", trues);
}

#[test]
fn test_next_double_unit_interval() {
    let mut rng = rng(99_999);
    for _ in 0..1000 {
        let value = rng.next_double();
        assert!(
            (0.0..1.0).contains(&value),
            "next_double() produced value {} outside [0.0, 1.0)",
            value
        );
    }
}

proptest! {
    #[test]
    fn prop_int_range_containment(seed in any::<i64>(), from in any::<i32>(), width in 1i64..=u32::MAX as i64) {
        let until = (from as i64 + width).min(i32::MAX as i64) as i32;
        prop_assume!(from < until);
        let mut rng = rng(seed);
        for _ in 0..16 {
            let value = rng.next_int_range(from, until).unwrap();
            prop_assert!(from <= value && value < until, "{} not in [{}, {})", value, from, until);
        }
    }

    #[test]
    fn prop_adjacent_int_range(seed in any::<i64>(), from in (i32::MIN)..i32::MAX) {
        let mut rng = rng(seed);
        prop_assert_eq!(rng.next_int_range(from, from + 1).unwrap(), from);
    }

    #[test]
    fn prop_int_until_containment(seed in any::<i64>(), until in 1i32..=i32::MAX) {
        let mut rng = rng(seed);
        let value = rng.next_int_until(until).unwrap();
        prop_assert!((0..until).contains(&value));
    }

    #[test]
    fn prop_double_range_containment(seed in any::<i64>(), a in -1.0e12f64..1.0e12, b in -1.0e12f64..1.0e12) {
        prop_assume!(a != b);
        let (from, until) = if a < b { (a, b) } else { (b, a) };
        let mut rng = rng(seed);
        for _ in 0..16 {
            let value = rng.next_double_range(from, until).unwrap();
            prop_assert!(from <= value && value < until, "{} not in [{}, {})", value, from, until);
        }
    }

    #[test]
    fn prop_adjacent_double_range(seed in any::<i64>(), from in -1.0e12f64..1.0e12) {
        let until = next_up(from);
        let mut rng = rng(seed);
        for _ in 0..16 {
            let value = rng.next_double_range(from, until).unwrap();
            prop_assert!(from <= value && value < until);
        }
    }
}
