#![cfg(feature = "dev")]
//! Tests for the engine layer: validation and cascade composition.
//!
//! ## Test Organization
//!
//! 1. **Validator** - Input, window, and Savitzky-Golay parameter checks
//! 2. **CTRM** - Window derivation, trim accumulation, failure surfacing
//! 3. **Savitzky-Golay Cascade** - Entry validation and pass composition

use approx::assert_relative_eq;

use anomaly_smoothing::internals::algorithms::boxcar::running_mean;
use anomaly_smoothing::internals::algorithms::savgol::savgol_pass;
use anomaly_smoothing::internals::engine::cascade::{
    ctrm_windows, savgol_cascade, triple_running_mean, CTRM_RATIO, SAVGOL_PASSES,
};
use anomaly_smoothing::internals::engine::validator::Validator;
use anomaly_smoothing::internals::primitives::errors::SmoothingError;

// ============================================================================
// Validator Tests
// ============================================================================

/// Test input validation: empty and non-finite sequences fail.
#[test]
fn test_validate_input() {
    assert_eq!(
        Validator::validate_input::<f64>(&[]),
        Err(SmoothingError::EmptyInput)
    );
    assert!(Validator::validate_input(&[0.0, 1.0]).is_ok());

    let err = Validator::validate_input(&[0.0, f64::INFINITY]).unwrap_err();
    assert!(matches!(err, SmoothingError::InvalidNumericValue(_)));
}

/// Test window validation bounds.
#[test]
fn test_validate_window() {
    assert!(Validator::validate_window(1, 1).is_ok());
    assert!(Validator::validate_window(5, 10).is_ok());

    assert_eq!(
        Validator::validate_window(0, 10),
        Err(SmoothingError::InvalidWindow { window_len: 0, n: 10 })
    );
    assert_eq!(
        Validator::validate_window(11, 10),
        Err(SmoothingError::InvalidWindow { window_len: 11, n: 10 })
    );
}

/// Test Savitzky-Golay parameter validation, check by check.
#[test]
fn test_validate_savgol_params() {
    assert!(Validator::validate_savgol_params(7, 3, 20).is_ok());
    assert!(Validator::validate_savgol_params(7, 6, 7).is_ok());

    for (window_size, order, n) in [(6, 3, 20), (0, 0, 20), (7, 7, 20), (7, 8, 20), (21, 3, 20)] {
        let err = Validator::validate_savgol_params(window_size, order, n).unwrap_err();
        assert!(
            matches!(err, SmoothingError::InvalidFilterParameters(_)),
            "({window_size}, {order}, {n}) should be rejected"
        );
    }
}

// ============================================================================
// CTRM Tests
// ============================================================================

/// Test derived window sequences against hand-computed rounding.
#[test]
fn test_ctrm_window_derivation() {
    assert_eq!(ctrm_windows(12), [12, 10, 8]);
    assert_eq!(ctrm_windows(60), [60, 50, 41]);
    assert_eq!(ctrm_windows(180), [180, 149, 123]);
    assert_eq!(ctrm_windows(1), [1, 1, 1]);
}

/// Test the shrink ratio constant feeding the derivation.
#[test]
fn test_ctrm_ratio_derivation() {
    let second = (12.0 / CTRM_RATIO).round() as usize;
    assert_eq!(ctrm_windows(12)[1], second);
}

/// Test that cumulative offsets equal the sum of the constituent passes'.
#[test]
fn test_ctrm_trims_accumulate() {
    let x: Vec<f64> = (0..70).map(|i| (i as f64 * 0.11).sin()).collect();

    let cascade = triple_running_mean(&x, 12).unwrap();

    let (y1, t1) = running_mean(&x, 12);
    let (y2, t2) = running_mean(&y1, 10);
    let (y3, t3) = running_mean(&y2, 8);

    assert_eq!(cascade.trim, t1 + t2 + t3);
    assert_eq!(cascade.values.len(), y3.len());
    for (got, want) in cascade.values.iter().zip(&y3) {
        assert_relative_eq!(*got, *want, max_relative = 1e-12);
    }
}

/// Test that the failing pass reports the shrunken intermediate length.
#[test]
fn test_ctrm_failure_names_intermediate_length() {
    // period 8 -> windows [8, 7, 6]; the first pass shrinks 10 to 3, so
    // the second pass must fail with window 7 against length 3.
    let x: Vec<f64> = (0..10).map(|i| i as f64).collect();
    let err = triple_running_mean(&x, 8).unwrap_err();
    assert_eq!(err, SmoothingError::InvalidWindow { window_len: 7, n: 3 });
}

// ============================================================================
// Savitzky-Golay Cascade Tests
// ============================================================================

/// Test that the cascade equals five explicit sequential passes.
#[test]
fn test_savgol_cascade_composition() {
    let x: Vec<f64> = (0..40).map(|i| (i as f64 * 0.23).sin() + 0.02 * i as f64).collect();
    let (window_size, order) = (9, 3);

    let cascade = savgol_cascade(&x, window_size, order).unwrap();

    let mut manual = x.clone();
    for _ in 0..SAVGOL_PASSES {
        manual = savgol_pass(&manual, window_size, order).unwrap();
    }

    for (got, want) in cascade.iter().zip(&manual) {
        assert_relative_eq!(*got, *want, max_relative = 1e-12);
    }
}

/// Test that parameters are validated once at entry.
#[test]
fn test_savgol_cascade_entry_validation() {
    let x = vec![0.0_f64; 8];
    let err = savgol_cascade(&x, 9, 3).unwrap_err();
    assert!(matches!(err, SmoothingError::InvalidFilterParameters(_)));

    let err = savgol_cascade(&x, 7, 7).unwrap_err();
    assert!(matches!(err, SmoothingError::InvalidFilterParameters(_)));
}
