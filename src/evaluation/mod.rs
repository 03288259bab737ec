//! Layer 4: Evaluation
//!
//! # Purpose
//!
//! This layer assesses fit quality after the solver has run: residual
//! summaries and the proportion of explained variance.
//!
//! # Architecture
//!
//! ```text
//! Layer 6: API
//!   ↓
//! Layer 5: Engine
//!   ↓
//! Layer 4: Evaluation ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Residual and variance-explained diagnostics.
pub mod diagnostics;
