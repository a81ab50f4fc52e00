//! Input validation for smoothing parameters and data.
//!
//! ## Purpose
//!
//! This module provides the fail-fast validation functions for filter
//! parameters and input sequences. Every filter call validates eagerly at
//! entry, so algorithms can assume their preconditions hold.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Window Bounds**: Running-mean windows must lie in `1..=n`.
//! * **Savitzky-Golay Constraints**: Odd window, `order < window_size`,
//!   window within the sequence.
//! * **Finite Checks**: Sentinel markers are assumed stripped by the data
//!   loader, but non-finite samples are still rejected rather than trusted.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or repair invalid inputs.
//! * This module does not perform the smoothing itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothingError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for smoothing parameters and input data.
///
/// Provides static methods returning `Result<(), SmoothingError>` that fail
/// fast upon identifying the first violation.
pub struct Validator;

impl Validator {
    /// Validate an input sequence: non-empty and fully finite.
    pub fn validate_input<T: Float>(x: &[T]) -> Result<(), SmoothingError> {
        if x.is_empty() {
            return Err(SmoothingError::EmptyInput);
        }

        for (i, &v) in x.iter().enumerate() {
            if !v.is_finite() {
                return Err(SmoothingError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    v.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate a running-mean window against the sequence length.
    pub fn validate_window(window_len: usize, n: usize) -> Result<(), SmoothingError> {
        if window_len == 0 || window_len > n {
            return Err(SmoothingError::InvalidWindow { window_len, n });
        }
        Ok(())
    }

    /// Validate Savitzky-Golay parameters against the sequence length.
    pub fn validate_savgol_params(
        window_size: usize,
        order: usize,
        n: usize,
    ) -> Result<(), SmoothingError> {
        if window_size % 2 == 0 {
            return Err(SmoothingError::InvalidFilterParameters(format!(
                "window_size={window_size} (must be a positive odd integer)"
            )));
        }
        if order >= window_size {
            return Err(SmoothingError::InvalidFilterParameters(format!(
                "order={order} (must be less than window_size {window_size})"
            )));
        }
        if window_size > n {
            return Err(SmoothingError::InvalidFilterParameters(format!(
                "window_size={window_size} (exceeds sequence length {n})"
            )));
        }
        Ok(())
    }
}
