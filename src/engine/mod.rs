//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer orchestrates the smoothing process: eager parameter/input
//! validation, sequential composition of cascaded passes, and the result
//! types returned to callers.
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Sequential cascade composition (CTRM windows, Savitzky-Golay passes).
pub mod cascade;

/// Output types for smoothing operations.
pub mod output;

/// Validation utilities.
pub mod validator;
