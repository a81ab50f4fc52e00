//! Local polynomial least-squares smoothing kernels.
//!
//! ## Purpose
//!
//! This module derives the coefficient vector of a Savitzky-Golay style
//! smoothing kernel for an arbitrary window geometry: the first row of the
//! pseudoinverse of the local Vandermonde design matrix. Dotting that
//! vector with a window of samples yields the least-squares polynomial
//! fit evaluated at the window's anchor position.
//!
//! ## Design notes
//!
//! * **Normal equations**: For a full-column-rank design `B`,
//!   `pinv(B) = (BᵀB)⁻¹ Bᵀ`, so the first row of the pseudoinverse is
//!   `(BᵀB)⁻¹ e₀` propagated back through `B`. `BᵀB` is a small
//!   `(order+1) × (order+1)` power-sum Gram matrix, solved directly with
//!   partial pivoting rather than forming a full pseudoinverse.
//! * **Function-value only**: Only the constant-term row is extracted; no
//!   derivative kernels (the zeroth-derivative scale factor, `0!`, is 1).
//! * **Generics**: Generic over `Float` types.
//!
//! ## Key concepts
//!
//! * **Window geometry**: Offsets `k_r = r - center` for rows
//!   `r in 0..window_size`; `center` is the position being smoothed,
//!   measured inside the window. Edge positions use asymmetric geometries.
//! * **Polynomial reproduction**: The kernel exactly reproduces any
//!   polynomial of degree <= `order` at offset 0, which is the defining
//!   property of the filter.
//!
//! ## Invariants
//!
//! * `center < window_size` and `order < window_size`.
//! * The returned kernel has length `window_size` and finite entries.
//!
//! ## Non-goals
//!
//! * This module does not validate user-facing parameters (engine layer).
//! * This module does not cache kernels across calls.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::{format, vec, vec::Vec};
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::SmoothingError;

// ============================================================================
// Kernel Derivation
// ============================================================================

/// Derive the smoothing kernel for a local polynomial fit.
///
/// `window_size` samples are fitted with a degree-`order` polynomial in the
/// offsets `k_r = r - center`; the returned vector `m` satisfies
/// `fit(0) = Σ m[r] · x[r]` for the least-squares fit of any window `x`.
///
/// # Errors
///
/// Returns [`SmoothingError::NumericalInstability`] if the normal matrix is
/// degenerate (vanishing pivot) or the solve produces non-finite values.
pub fn smoothing_kernel<T: Float>(
    window_size: usize,
    order: usize,
    center: usize,
) -> Result<Vec<T>, SmoothingError> {
    debug_assert!(
        center < window_size,
        "smoothing_kernel: center must lie inside the window"
    );
    debug_assert!(
        order < window_size,
        "smoothing_kernel: order must be below window_size"
    );

    let p = order + 1;

    // Powers table: powers[r * p + j] = k_r^j with k_r = r - center.
    let mut powers = vec![T::zero(); window_size * p];
    for r in 0..window_size {
        let k = T::from(r as isize - center as isize).unwrap();
        let mut acc = T::one();
        for j in 0..p {
            powers[r * p + j] = acc;
            acc = acc * k;
        }
    }

    // Gram matrix BᵀB: power sums over the window geometry.
    let mut gram = vec![T::zero(); p * p];
    for r in 0..window_size {
        for j in 0..p {
            for l in j..p {
                gram[j * p + l] = gram[j * p + l] + powers[r * p + j] * powers[r * p + l];
            }
        }
    }
    for j in 0..p {
        for l in 0..j {
            gram[j * p + l] = gram[l * p + j];
        }
    }

    // Solve (BᵀB) a = e0.
    let mut rhs = vec![T::zero(); p];
    rhs[0] = T::one();
    let coeffs = solve_dense(&mut gram, &mut rhs, p).ok_or_else(|| {
        SmoothingError::NumericalInstability(format!(
            "degenerate polynomial fit for window_size={window_size}, order={order}, center={center}"
        ))
    })?;

    // Propagate back through B: m[r] = Σ_j a[j] · k_r^j.
    let mut kernel = vec![T::zero(); window_size];
    for r in 0..window_size {
        let mut acc = T::zero();
        for j in 0..p {
            acc = acc + coeffs[j] * powers[r * p + j];
        }
        if !acc.is_finite() {
            return Err(SmoothingError::NumericalInstability(format!(
                "non-finite kernel coefficient at row {r} for window_size={window_size}, order={order}, center={center}"
            )));
        }
        kernel[r] = acc;
    }

    Ok(kernel)
}

// ============================================================================
// Dense Solve
// ============================================================================

/// Solve the `p × p` system `A a = b` in place via Gaussian elimination
/// with partial pivoting. Returns `None` on a vanishing pivot.
fn solve_dense<T: Float>(a: &mut [T], b: &mut [T], p: usize) -> Option<Vec<T>> {
    debug_assert_eq!(a.len(), p * p);
    debug_assert_eq!(b.len(), p);

    // Scale-aware pivot tolerance.
    let mut scale = T::zero();
    for &v in a.iter() {
        scale = scale.max(v.abs());
    }
    let tol = T::epsilon() * scale.max(T::one());

    for i in 0..p {
        // Partial pivot.
        let mut pivot_row = i;
        for r in (i + 1)..p {
            if a[r * p + i].abs() > a[pivot_row * p + i].abs() {
                pivot_row = r;
            }
        }
        if pivot_row != i {
            for c in 0..p {
                a.swap(i * p + c, pivot_row * p + c);
            }
            b.swap(i, pivot_row);
        }

        let pivot = a[i * p + i];
        if pivot.abs() <= tol {
            return None;
        }

        // Eliminate below.
        for r in (i + 1)..p {
            let factor = a[r * p + i] / pivot;
            for c in i..p {
                a[r * p + c] = a[r * p + c] - factor * a[i * p + c];
            }
            b[r] = b[r] - factor * b[i];
        }
    }

    // Back substitution.
    let mut out = vec![T::zero(); p];
    for i in (0..p).rev() {
        let mut sum = b[i];
        for c in (i + 1)..p {
            sum = sum - a[i * p + c] * out[c];
        }
        out[i] = sum / a[i * p + i];
    }

    Some(out)
}
