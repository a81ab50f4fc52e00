#![cfg(feature = "dev")]
//! Tests for the single-pass smoothing algorithms.
//!
//! These tests verify the running mean against naive per-window averaging
//! and the edge-adaptive Savitzky-Golay pass against its defining
//! properties (length preservation, polynomial reproduction, interior
//! kernel consistency).

use approx::assert_relative_eq;

use anomaly_smoothing::internals::algorithms::boxcar::running_mean;
use anomaly_smoothing::internals::algorithms::savgol::savgol_pass;
use anomaly_smoothing::internals::math::polyfit::smoothing_kernel;

// ============================================================================
// Running Mean
// ============================================================================

/// Test the sliding accumulator against naive window means.
#[test]
fn test_running_mean_matches_naive() {
    let x: Vec<f64> = (0..64).map(|i| (i as f64 * 0.37).sin() * 3.0 + 0.1 * i as f64).collect();

    for window_len in [1, 2, 5, 13, 64] {
        let (got, _) = running_mean(&x, window_len);
        for (i, &v) in got.iter().enumerate() {
            let naive: f64 =
                x[i..i + window_len].iter().sum::<f64>() / window_len as f64;
            assert_relative_eq!(v, naive, max_relative = 1e-12);
        }
    }
}

/// Test window-equal-to-length collapse to a single overall mean.
#[test]
fn test_running_mean_full_window() {
    let x = vec![2.0, 4.0, 6.0, 8.0];
    let (y, trim) = running_mean(&x, 4);

    assert_eq!(y.len(), 1);
    assert_relative_eq!(y[0], 5.0, max_relative = 1e-12);
    assert_eq!((trim.front, trim.back), (1, 2));
}

/// Test that a unit window is the identity.
#[test]
fn test_running_mean_unit_window() {
    let x = vec![1.0, -2.0, 3.5];
    let (y, trim) = running_mean(&x, 1);

    assert_eq!(y, x);
    assert_eq!(trim.total(), 0);
}

// ============================================================================
// Savitzky-Golay Pass
// ============================================================================

/// Test that the pass preserves length down to the minimal sequence.
#[test]
fn test_savgol_pass_length() {
    for n in [5, 6, 9, 40] {
        let x: Vec<f64> = (0..n).map(|i| (i as f64 * 0.7).cos()).collect();
        let y = savgol_pass(&x, 5, 2).unwrap();
        assert_eq!(y.len(), n);
    }
}

/// Test exact reproduction of a cubic trend, edges included.
#[test]
fn test_savgol_pass_reproduces_cubic() {
    let x: Vec<f64> = (0..24)
        .map(|i| {
            let t = i as f64;
            0.001 * t * t * t - 0.04 * t * t + 0.3 * t - 1.0
        })
        .collect();
    let y = savgol_pass(&x, 9, 3).unwrap();

    for (got, want) in y.iter().zip(&x) {
        assert_relative_eq!(*got, *want, max_relative = 1e-8, epsilon = 1e-8);
    }
}

/// Test interior values against an explicit symmetric-kernel dot product.
#[test]
fn test_savgol_pass_interior_consistency() {
    let x: Vec<f64> = (0..20).map(|i| (i as f64 * 1.3).sin()).collect();
    let (window_size, order) = (7, 2);
    let half = (window_size - 1) / 2;

    let y = savgol_pass(&x, window_size, order).unwrap();
    let kernel = smoothing_kernel::<f64>(window_size, order, half).unwrap();

    for i in half..x.len() - half {
        let manual: f64 = kernel
            .iter()
            .zip(&x[i - half..i + half + 1])
            .map(|(&m, &v)| m * v)
            .sum();
        assert_relative_eq!(y[i], manual, max_relative = 1e-12);
    }
}

/// Test the full-order pass: `order = window_size - 1` interpolates, so the
/// output equals the input everywhere.
#[test]
fn test_savgol_pass_full_order_identity() {
    let x: Vec<f64> = (0..12).map(|i| (i as f64 * 0.9).sin() * 2.0).collect();
    let y = savgol_pass(&x, 5, 4).unwrap();

    for (got, want) in y.iter().zip(&x) {
        assert_relative_eq!(*got, *want, max_relative = 1e-7, epsilon = 1e-7);
    }
}

/// Test the minimal case `window_size == n`.
#[test]
fn test_savgol_pass_window_equals_length() {
    let x: Vec<f64> = (0..7).map(|i| i as f64 * i as f64).collect();
    let y = savgol_pass(&x, 7, 2).unwrap();

    assert_eq!(y.len(), 7);
    for (got, want) in y.iter().zip(&x) {
        assert_relative_eq!(*got, *want, max_relative = 1e-8, epsilon = 1e-8);
    }
}
