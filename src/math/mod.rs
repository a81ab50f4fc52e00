//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure linear-algebra building blocks for local
//! polynomial smoothing: design-matrix geometry, the power-sum Gram matrix,
//! and the pseudoinverse-derived smoothing kernels. It has no
//! algorithm-specific logic.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Local polynomial least-squares kernels.
pub mod polyfit;
