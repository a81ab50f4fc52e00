//! High-level API for anomaly smoothing.
//!
//! ## Purpose
//!
//! This module provides the user-facing filter types. Each filter is a
//! small fluent configuration struct with climate-series defaults (monthly
//! data, annual windows); `smooth()` validates eagerly and runs the batch
//! computation.
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent setters with sensible defaults for all
//!   parameters.
//! * **Validated**: All errors are detected at the start of each `smooth`
//!   call (or at the matrix solve) and propagated immediately.
//! * **Type-Safe**: Smoothing is generic over `Float` types.
//! * **Pure**: Filters hold configuration only; no state survives a call,
//!   so independent invocations may run concurrently over a shared input.
//!
//! ## Key concepts
//!
//! * **Trimming filters** ([`BoxcarSmoother`], [`CascadedTripleRunningMean`])
//!   return [`Smoothed`]: shortened values plus [`TrimOffsets`].
//! * **Length-preserving filters** ([`SavitzkyGolayFilter`],
//!   [`SavitzkyGolayCascade`]) return a plain `Vec` of the input's length.

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
use crate::engine::cascade::{savgol_cascade, triple_running_mean};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::engine::output::Smoothed;
pub use crate::primitives::errors::SmoothingError;
pub use crate::primitives::trim::TrimOffsets;

// ============================================================================
// Boxcar Smoother
// ============================================================================

/// Uniform (running-mean) smoother in valid-convolution mode.
///
/// # Example
///
/// ```rust
/// use anomaly_smoothing::prelude::*;
///
/// let x = vec![1.0, 1.0, 2.0, 3.0, 5.0, 5.0, 6.0, 7.0, 8.0, 8.0];
/// let out = BoxcarSmoother::new().window_len(3).smooth(&x)?;
///
/// assert_eq!(out.len(), 8);
/// assert_eq!(out.trim, TrimOffsets { front: 1, back: 1 });
/// # Result::<(), SmoothingError>::Ok(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxcarSmoother {
    /// Number of consecutive samples each window mean covers.
    window_len: usize,
}

impl Default for BoxcarSmoother {
    fn default() -> Self {
        Self::new()
    }
}

impl BoxcarSmoother {
    /// Create a smoother with the default annual window (12 samples).
    pub fn new() -> Self {
        Self { window_len: 12 }
    }

    /// Set the averaging window length.
    pub fn window_len(mut self, window_len: usize) -> Self {
        self.window_len = window_len;
        self
    }

    /// Smooth `x`, returning `n - window_len + 1` values plus trim offsets.
    ///
    /// # Errors
    ///
    /// * [`SmoothingError::EmptyInput`] / [`SmoothingError::InvalidNumericValue`]
    ///   for invalid data.
    /// * [`SmoothingError::InvalidWindow`] if `window_len` is zero or
    ///   exceeds the sequence length.
    pub fn smooth<T: Float>(&self, x: &[T]) -> Result<Smoothed<T>, SmoothingError> {
        Validator::validate_input(x)?;
        Validator::validate_window(self.window_len, x.len())?;

        let (values, trim) = running_mean(x, self.window_len);
        Ok(Smoothed { values, trim })
    }
}

// ============================================================================
// Cascaded Triple Running Mean
// ============================================================================

/// Three cascaded boxcar passes with geometrically shrinking windows.
///
/// The second and third windows are derived by dividing the base period by
/// 1.2067 (rounding each step), which tunes the stacked means into a usable
/// low-pass filter for trend visualization. Trim offsets accumulate across
/// the passes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CascadedTripleRunningMean {
    /// Base averaging window of the first pass.
    period: usize,
}

impl Default for CascadedTripleRunningMean {
    fn default() -> Self {
        Self::new()
    }
}

impl CascadedTripleRunningMean {
    /// Create a CTRM with the default annual period (12 samples).
    pub fn new() -> Self {
        Self { period: 12 }
    }

    /// Set the base period of the first pass.
    pub fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Smooth `x` with three shrinking boxcar passes.
    ///
    /// # Errors
    ///
    /// In addition to the input errors, fails with
    /// [`SmoothingError::InvalidWindow`] if any pass's window exceeds the
    /// shrinking intermediate sequence, which happens when `period` is
    /// large relative to `x.len()`.
    pub fn smooth<T: Float>(&self, x: &[T]) -> Result<Smoothed<T>, SmoothingError> {
        Validator::validate_input(x)?;
        triple_running_mean(x, self.period)
    }
}

// ============================================================================
// Savitzky-Golay Filter (single pass)
// ============================================================================

/// Single-pass, edge-adaptive Savitzky-Golay smoothing filter.
///
/// Preserves the input length by shifting the polynomial fit geometry near
/// the boundaries instead of mirroring data. Polynomial trends of degree
/// <= `order` pass through unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavitzkyGolayFilter {
    /// Odd number of samples in each local fit.
    window_size: usize,

    /// Degree of the local least-squares polynomial.
    order: usize,
}

impl Default for SavitzkyGolayFilter {
    fn default() -> Self {
        Self::new()
    }
}

impl SavitzkyGolayFilter {
    /// Create a filter with a 25-sample window and cubic polynomial.
    pub fn new() -> Self {
        Self {
            window_size: 25,
            order: 3,
        }
    }

    /// Set the window size (must be odd and within the sequence).
    pub fn window_size(mut self, window_size: usize) -> Self {
        self.window_size = window_size;
        self
    }

    /// Set the polynomial order (must be below the window size).
    pub fn order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Smooth `x`, returning a sequence of the same length.
    ///
    /// # Errors
    ///
    /// * [`SmoothingError::InvalidFilterParameters`] for an even window,
    ///   `order >= window_size`, or a window exceeding the sequence.
    /// * [`SmoothingError::NumericalInstability`] if a local fit is
    ///   degenerate.
    pub fn smooth<T: Float>(&self, x: &[T]) -> Result<Vec<T>, SmoothingError> {
        Validator::validate_input(x)?;
        Validator::validate_savgol_params(self.window_size, self.order, x.len())?;
        savgol_pass(x, self.window_size, self.order)
    }
}

// ============================================================================
// Savitzky-Golay Cascade (5-pass)
// ============================================================================

/// Five sequential Savitzky-Golay passes with `window_size = 2·period + 1`.
///
/// Approximates the frequency response of a higher-effective-order filter
/// while keeping each pass a numerically tame low-degree fit. Each pass
/// preserves length, so no trimming occurs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SavitzkyGolayCascade {
    /// Half-window of each pass; the window size is `2 * period + 1`.
    period: usize,

    /// Degree of the local least-squares polynomial in every pass.
    order: usize,
}

impl Default for SavitzkyGolayCascade {
    fn default() -> Self {
        Self::new()
    }
}

impl SavitzkyGolayCascade {
    /// Create a cascade with the default annual period (12) and cubic order.
    pub fn new() -> Self {
        Self {
            period: 12,
            order: 3,
        }
    }

    /// Set the half-window period of every pass.
    pub fn period(mut self, period: usize) -> Self {
        self.period = period;
        self
    }

    /// Set the polynomial order of every pass.
    pub fn order(mut self, order: usize) -> Self {
        self.order = order;
        self
    }

    /// Smooth `x` with five sequential passes, preserving length.
    ///
    /// Parameters are fixed across passes, so failure conditions are
    /// determined once at entry; a pass failure propagates unchanged.
    pub fn smooth<T: Float>(&self, x: &[T]) -> Result<Vec<T>, SmoothingError> {
        Validator::validate_input(x)?;
        savgol_cascade(x, 2 * self.period + 1, self.order)
    }
}
