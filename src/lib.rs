//! # anomaly-smoothing — trend filters for evenly-sampled climate series
//!
//! Deterministic batch smoothing filters that turn a noisy, evenly-sampled
//! 1-D sequence (monthly temperature anomaly values) into smoothed
//! sequences suitable for trend visualization:
//!
//! * **Boxcar smoother** — a uniform running mean in valid-convolution
//!   mode. No padding or mirroring, so the output is shorter than the
//!   input; the returned trim offsets map it back onto the time axis.
//! * **Cascaded triple running mean (CTRM)** — three boxcar passes with
//!   geometrically shrinking windows (ratio 1.2067), a cheap low-pass
//!   filter for long-term trends.
//! * **Savitzky-Golay filter** — a single-pass, edge-adaptive local
//!   polynomial least-squares smoother that preserves the input length and
//!   leaves polynomial trends of degree <= `order` untouched. A five-pass
//!   cascade approximates a higher-order response.
//!
//! ## Quick Start
//!
//! ```rust
//! use anomaly_smoothing::prelude::*;
//!
//! // Monthly anomaly values, sentinel markers already stripped.
//! let anomalies: Vec<f64> = (0..120).map(|i| (i as f64 * 0.4).sin() * 0.2 + i as f64 * 0.001).collect();
//!
//! // Annual low-pass trend (shortened output + alignment offsets).
//! let annual = CascadedTripleRunningMean::new().period(12).smooth(&anomalies)?;
//! let _time_range = annual.aligned_range();
//!
//! // Annual Savitzky-Golay smooth (same length as the input).
//! let sg = SavitzkyGolayCascade::new().period(12).order(3).smooth(&anomalies)?;
//! assert_eq!(sg.len(), anomalies.len());
//! # Result::<(), SmoothingError>::Ok(())
//! ```
//!
//! ## Error Handling
//!
//! Every filter call validates eagerly and returns
//! `Result<_, SmoothingError>`; the `?` operator is idiomatic. These are
//! deterministic numeric computations, so an error identifies the
//! parameter that violated its invariant rather than something to retry.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! The crate supports `no_std` environments; disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! anomaly-smoothing = { version = "0.1", default-features = false }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// Layer 1: Primitives - error types and trim bookkeeping.
mod primitives;

// Layer 2: Math - polynomial least-squares kernels.
mod math;

// Layer 3: Algorithms - single-pass smoothing primitives.
mod algorithms;

// Layer 4: Engine - validation, cascade composition, outputs.
mod engine;

// High-level fluent API for the smoothing filters.
mod api;

// Standard smoothing prelude.
pub mod prelude {
    pub use crate::api::{
        BoxcarSmoother, CascadedTripleRunningMean, SavitzkyGolayCascade, SavitzkyGolayFilter,
        Smoothed, SmoothingError, TrimOffsets,
    };
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing
// purposes. It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    pub mod engine {
        pub use crate::engine::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
