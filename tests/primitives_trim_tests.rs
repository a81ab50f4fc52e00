#![cfg(feature = "dev")]
//! Tests for trim-offset bookkeeping.
//!
//! These tests verify the front/back split rule, accumulation across
//! cascaded passes, and alignment against the original index range.

use anomaly_smoothing::internals::primitives::trim::TrimOffsets;

/// Test the split rule: front gets the floor, back the remainder.
#[test]
fn test_split_parity() {
    assert_eq!(TrimOffsets::split(0), TrimOffsets { front: 0, back: 0 });
    assert_eq!(TrimOffsets::split(1), TrimOffsets { front: 0, back: 1 });
    assert_eq!(TrimOffsets::split(2), TrimOffsets { front: 1, back: 1 });
    assert_eq!(TrimOffsets::split(5), TrimOffsets { front: 2, back: 3 });
    assert_eq!(TrimOffsets::split(11), TrimOffsets { front: 5, back: 6 });
}

/// Test that the back never loses fewer samples than the front.
#[test]
fn test_back_absorbs_odd_difference() {
    for diff in 0..50 {
        let trim = TrimOffsets::split(diff);
        assert_eq!(trim.total(), diff);
        assert!(trim.back >= trim.front);
        assert!(trim.back - trim.front <= 1);
    }
}

/// Test additive accumulation across passes.
#[test]
fn test_accumulation() {
    let total = TrimOffsets::split(11) + TrimOffsets::split(4) + TrimOffsets::split(3);
    assert_eq!(total, TrimOffsets { front: 8, back: 10 });
}

/// Test alignment against the original index range.
#[test]
fn test_aligned_range() {
    let trim = TrimOffsets { front: 2, back: 3 };
    assert_eq!(trim.aligned_range(10), 2..7);

    let none = TrimOffsets::default();
    assert_eq!(none.aligned_range(4), 0..4);
}
