//! Valid-mode running mean (boxcar) smoothing.
//!
//! ## Purpose
//!
//! This module implements the uniform-weight moving average in "valid"
//! convolution mode: no padding, no mirroring, no wraparound. Every output
//! sample is the mean of a full-width window, so the output is shorter than
//! the input and is accompanied by [`TrimOffsets`] describing the loss.
//!
//! ## Design notes
//!
//! * **Sliding accumulator**: O(n) running sum instead of per-window
//!   re-summation; identical to the uniform-kernel convolution for finite
//!   input.
//! * **Preconditions**: Window bounds are validated by the engine layer;
//!   this module guards them with debug assertions only.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `len(output) = n - window_len + 1`.
//! * `trim.front + trim.back = window_len - 1`, `trim.front = diff / 2`.
//!
//! ## Non-goals
//!
//! * This module does not validate user input (engine layer).
//! * This module does not cascade passes (engine layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::trim::TrimOffsets;

// ============================================================================
// Running Mean
// ============================================================================

/// Smooth `x` with a uniform window of `window_len` samples.
///
/// Returns the shortened smoothed sequence together with the trim offsets
/// that map it back onto the input's index range.
pub fn running_mean<T: Float>(x: &[T], window_len: usize) -> (Vec<T>, TrimOffsets) {
    let n = x.len();
    debug_assert!(
        window_len >= 1 && window_len <= n,
        "running_mean: window_len must be in 1..=n"
    );

    let out_len = n - window_len + 1;
    let inv_w = T::one() / T::from(window_len).unwrap();

    let mut out = Vec::with_capacity(out_len);
    let mut acc = T::zero();
    for &v in &x[..window_len] {
        acc = acc + v;
    }
    out.push(acc * inv_w);

    for i in window_len..n {
        acc = acc + x[i] - x[i - window_len];
        out.push(acc * inv_w);
    }

    let trim = TrimOffsets::split(n - out_len);
    (out, trim)
}
