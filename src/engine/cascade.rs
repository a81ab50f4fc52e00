//! Sequential cascade composition.
//!
//! ## Purpose
//!
//! This module orchestrates the two cascaded filters as explicit sequential
//! composition of their single-pass primitives: the cascaded triple running
//! mean (three boxcar passes with geometrically shrinking windows) and the
//! five-pass Savitzky-Golay filter.
//!
//! ## Design notes
//!
//! * **Window derivation**: The CTRM divides the base period by 1.2067
//!   twice, rounding each step. The ratio is the empirical constant that
//!   makes three stacked running means approximate a sharp low-pass
//!   response.
//! * **Per-pass validation**: Each CTRM pass re-validates its window
//!   against the already-shrunk intermediate length, so an oversized period
//!   surfaces as an explicit [`SmoothingError::InvalidWindow`] instead of a
//!   silent empty result.
//! * **Fixed parameters**: Savitzky-Golay cascade parameters are identical
//!   across passes (the filter preserves length), so they are validated
//!   once at entry.
//!
//! ## Invariants
//!
//! * CTRM trim offsets equal the sum of the three constituent passes'.
//! * Passes execute strictly in sequence; each consumes the previous full
//!   output.
//!
//! ## Non-goals
//!
//! * This module does not implement the single-pass filters (algorithms
//!   layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::algorithms::boxcar::running_mean;
use crate::algorithms::savgol::savgol_pass;
use crate::engine::output::Smoothed;
use crate::engine::validator::Validator;
use crate::primitives::errors::SmoothingError;
use crate::primitives::trim::TrimOffsets;

// ============================================================================
// Cascade Constants
// ============================================================================

/// Window shrink ratio between successive CTRM passes.
pub const CTRM_RATIO: f64 = 1.2067;

/// Number of boxcar passes in the cascaded triple running mean.
pub const CTRM_PASSES: usize = 3;

/// Number of passes in the Savitzky-Golay cascade.
pub const SAVGOL_PASSES: usize = 5;

// ============================================================================
// Cascaded Triple Running Mean
// ============================================================================

/// Derive the shrinking window sequence for a CTRM base `period`.
///
/// `period >= 1` implies every derived window is `>= 1`, since dividing by
/// 1.2067 never rounds a positive window down to zero.
pub fn ctrm_windows(period: usize) -> [usize; CTRM_PASSES] {
    let period2 = Float::round(period as f64 / CTRM_RATIO) as usize;
    let period3 = Float::round(period2 as f64 / CTRM_RATIO) as usize;
    [period, period2, period3]
}

/// Run the cascaded triple running mean over `x`.
///
/// Trim offsets accumulate additively across the three passes.
pub fn triple_running_mean<T: Float>(
    x: &[T],
    period: usize,
) -> Result<Smoothed<T>, SmoothingError> {
    let mut data: Vec<T> = x.to_vec();
    let mut trim = TrimOffsets::default();

    for window_len in ctrm_windows(period) {
        Validator::validate_window(window_len, data.len())?;
        let (smoothed, pass_trim) = running_mean(&data, window_len);
        data = smoothed;
        trim = trim + pass_trim;
    }

    Ok(Smoothed { values: data, trim })
}

// ============================================================================
// Savitzky-Golay Cascade
// ============================================================================

/// Run the five-pass Savitzky-Golay cascade over `x`.
///
/// Each pass preserves length, so the parameters (and therefore the failure
/// conditions) are fixed across passes and validated once at entry.
pub fn savgol_cascade<T: Float>(
    x: &[T],
    window_size: usize,
    order: usize,
) -> Result<Vec<T>, SmoothingError> {
    Validator::validate_savgol_params(window_size, order, x.len())?;

    let mut data: Vec<T> = x.to_vec();
    for _ in 0..SAVGOL_PASSES {
        data = savgol_pass(&data, window_size, order)?;
    }
    Ok(data)
}
