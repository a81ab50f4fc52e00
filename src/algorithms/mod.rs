//! Layer 3: Algorithms
//!
//! This layer implements the single-pass smoothing primitives: the
//! valid-mode running mean and the edge-adaptive Savitzky-Golay filter.
//! Cascading and validation are orchestrated by the engine layer.

// Valid-mode running mean (boxcar) smoothing.
pub mod boxcar;

// Edge-adaptive Savitzky-Golay smoothing.
pub mod savgol;
