//! Error types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the error conditions that can occur during filter
//! configuration and execution: input validation failures, parameter
//! constraint violations, and numerical failures in the polynomial solve.
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending value and the applicable bound.
//! * **Eager**: Errors are detected at the start of each filter call (or at
//!   the matrix solve) and propagated immediately; no partial results.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic
//!   messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error`
//!   (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Input validation**: Empty sequences, non-finite samples.
//! 2. **Window validation**: Running-mean windows outside `1..=n`.
//! 3. **Filter parameters**: Savitzky-Golay window/order constraints.
//! 4. **Numerical failure**: Degenerate local polynomial fits.
//!
//! ## Non-goals
//!
//! * This module does not perform the validation logic itself.
//! * This module does not provide error recovery; these computations are
//!   deterministic, so retrying with unchanged input cannot succeed.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Error Type
// ============================================================================

/// Error type for smoothing operations.
#[derive(Debug, Clone, PartialEq)]
pub enum SmoothingError {
    /// Input sequence is empty; smoothing requires at least 1 sample.
    EmptyInput,

    /// Input data contains NaN or infinite values.
    InvalidNumericValue(String),

    /// Running-mean window length must satisfy `1 <= window_len <= n`.
    ///
    /// For the cascaded triple running mean, `n` is the length of the
    /// (already shrunk) intermediate sequence of the failing pass.
    InvalidWindow {
        /// The window length provided (or derived by the cascade).
        window_len: usize,
        /// Length of the sequence the window was applied to.
        n: usize,
    },

    /// Savitzky-Golay parameters violate a constraint (even window size,
    /// order not below the window size, or window exceeding the sequence).
    InvalidFilterParameters(String),

    /// The local polynomial fit produced a degenerate normal matrix or a
    /// non-finite coefficient vector.
    NumericalInstability(String),
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for SmoothingError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::EmptyInput => write!(f, "Input sequence is empty"),
            Self::InvalidNumericValue(s) => write!(f, "Invalid numeric value: {s}"),
            Self::InvalidWindow { window_len, n } => {
                write!(
                    f,
                    "Invalid window length: {window_len} (must be >= 1 and <= sequence length {n})"
                )
            }
            Self::InvalidFilterParameters(msg) => {
                write!(f, "Invalid filter parameters: {msg}")
            }
            Self::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {msg}")
            }
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for SmoothingError {}
