//! Edge-adaptive Savitzky-Golay smoothing (single pass).
//!
//! ## Purpose
//!
//! This module implements one pass of a length-preserving Savitzky-Golay
//! filter. Instead of mirroring or padding the data near the boundaries
//! (which would fabricate samples), the polynomial fit geometry is shifted:
//! each edge position gets its own asymmetric kernel drawn from the first
//! (or last) `window_size` real samples, while the interior is convolved
//! with a single shared symmetric kernel.
//!
//! ## Design notes
//!
//! * **Edge handling**: With `h = (window_size - 1) / 2`, positions
//!   `0..h` use kernels of geometry `k in [-i, window_size - i)` dotted
//!   against the leading `window_size` samples; positions `n-h..n` mirror
//!   this against the trailing samples. Each distinct geometry's kernel is
//!   derived exactly once per call.
//! * **Interior**: One symmetric kernel (`center = h`) applied in valid
//!   mode across the whole sequence.
//! * **No trimming**: Output length always equals input length.
//! * **Generics**: Generic over `Float` types.
//!
//! ## Invariants
//!
//! * `window_size` is odd, `order < window_size`, `window_size <= n`
//!   (validated by the engine layer).
//! * Polynomials of degree <= `order` pass through unchanged, edge
//!   positions included.
//!
//! ## Non-goals
//!
//! * This module does not compute derivative kernels.
//! * This module does not cascade passes (engine layer).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::polyfit::smoothing_kernel;
use crate::primitives::errors::SmoothingError;

// ============================================================================
// Single Pass
// ============================================================================

/// Apply one edge-adaptive Savitzky-Golay pass to `x`.
///
/// # Errors
///
/// Propagates [`SmoothingError::NumericalInstability`] from the kernel
/// derivation; parameter validation happens upstream.
pub fn savgol_pass<T: Float>(
    x: &[T],
    window_size: usize,
    order: usize,
) -> Result<Vec<T>, SmoothingError> {
    let n = x.len();
    debug_assert!(
        window_size % 2 == 1 && order < window_size && window_size <= n,
        "savgol_pass: parameters must be validated by the caller"
    );

    let half = (window_size - 1) / 2;
    let mut out = Vec::with_capacity(n);

    // Left edge: asymmetric fits anchored inside the leading window.
    let head = &x[..window_size];
    for i in 0..half {
        let kernel = smoothing_kernel::<T>(window_size, order, i)?;
        out.push(dot(&kernel, head));
    }

    // Interior: one symmetric kernel, valid-mode convolution.
    let kernel = smoothing_kernel::<T>(window_size, order, half)?;
    for start in 0..=(n - window_size) {
        out.push(dot(&kernel, &x[start..start + window_size]));
    }

    // Right edge: mirrored geometry against the trailing window.
    let tail = &x[n - window_size..];
    for i in (half + 1)..window_size {
        let kernel = smoothing_kernel::<T>(window_size, order, i)?;
        out.push(dot(&kernel, tail));
    }

    debug_assert_eq!(out.len(), n, "savgol_pass: output must preserve length");
    Ok(out)
}

#[inline]
fn dot<T: Float>(kernel: &[T], window: &[T]) -> T {
    let mut acc = T::zero();
    for (&m, &v) in kernel.iter().zip(window) {
        acc = acc + m * v;
    }
    acc
}
