//! Output types for smoothing operations.
//!
//! ## Purpose
//!
//! This module defines the [`Smoothed`] struct returned by trimming
//! filters: the shortened smoothed sequence plus the trim offsets needed
//! to align it against the caller's time axis.
//!
//! ## Invariants
//!
//! * `trim.front + trim.back` equals the number of input samples without a
//!   corresponding output value.
//!
//! ## Non-goals
//!
//! * This module does not perform calculations; it only stores results.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use core::fmt::{Display, Formatter, Result};
use core::ops::Range;

// Internal dependencies
use crate::primitives::trim::TrimOffsets;

// ============================================================================
// Result Structure
// ============================================================================

/// Output of a trimming filter: smoothed values plus alignment offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct Smoothed<T> {
    /// Smoothed samples, one per full-width input window.
    pub values: Vec<T>,

    /// Leading/trailing input samples without a smoothed value.
    pub trim: TrimOffsets,
}

impl<T> Smoothed<T> {
    /// Number of smoothed samples.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the smoothed sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Index range of the original input covered by `values`.
    ///
    /// `values[j]` corresponds to input index `trim.front + j`; plotting
    /// code pairs `values` with `time[range]`.
    pub fn aligned_range(&self) -> Range<usize> {
        self.trim
            .aligned_range(self.values.len() + self.trim.total())
    }
}

impl<T> Display for Smoothed<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(
            f,
            "Smoothed sequence: {} samples (trimmed {} front, {} back)",
            self.values.len(),
            self.trim.front,
            self.trim.back
        )
    }
}
