//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the fundamental data structures used throughout the
//! crate:
//! - The crate-wide error type
//! - The design matrix (predictors plus intercept row)
//!
//! These carry no regression logic of their own.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Crate-wide error type.
pub mod errors;

/// Design matrix storage and construction.
pub mod matrix;
