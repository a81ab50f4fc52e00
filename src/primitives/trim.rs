//! Trim-offset bookkeeping for valid-mode filters.
//!
//! A valid-mode running mean only emits values for full-width windows, so
//! its output is shorter than its input. `TrimOffsets` records how many
//! leading and trailing input samples have no corresponding smoothed value,
//! letting callers align the output against a time axis
//! (`time[front..n - back]`).

// External dependencies
use core::ops::{Add, Range};

/// Count of leading/trailing input samples dropped by a valid-mode filter.
///
/// Invariant: `front + back == input_len - output_len`, with
/// `front = diff / 2` so that, for an odd difference, one extra sample is
/// lost at the back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TrimOffsets {
    /// Leading samples without a smoothed value.
    pub front: usize,

    /// Trailing samples without a smoothed value.
    pub back: usize,
}

impl TrimOffsets {
    /// Split a length difference into front/back offsets.
    ///
    /// The split introduces a potential half-sample phase shift for even
    /// windows, which is why these filters are visualization-only.
    #[inline]
    pub fn split(diff: usize) -> Self {
        let front = diff / 2;
        Self {
            front,
            back: diff - front,
        }
    }

    /// Total number of trimmed samples.
    #[inline]
    pub fn total(&self) -> usize {
        self.front + self.back
    }

    /// Index range of the original sequence covered by the smoothed output.
    ///
    /// For an input of length `input_len`, the smoothed values correspond
    /// one-to-one with `x[front..input_len - back]`.
    #[inline]
    pub fn aligned_range(&self, input_len: usize) -> Range<usize> {
        debug_assert!(
            self.total() <= input_len,
            "aligned_range: trims exceed input length"
        );
        self.front..input_len - self.back
    }
}

impl Add for TrimOffsets {
    type Output = Self;

    /// Accumulate trims across cascaded passes.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            front: self.front + rhs.front,
            back: self.back + rhs.back,
        }
    }
}
