//! # OLS — Ordinary Least Squares Regression for Rust
//!
//! A small, layered OLS implementation covering the full demonstration
//! pipeline for linear regression: synthetic linear scenarios, closed-form
//! least-squares fitting, and residual diagnostics.
//!
//! ## What is OLS?
//!
//! Ordinary least squares fits a linear model by minimizing the sum of
//! squared residuals between observed and predicted responses. With a
//! design matrix X (one column of predictors per parameter, including a
//! constant intercept column) and response vector y, the estimate has the
//! closed form of the normal equations:
//!
//! ```text
//! β̂ = (XᵀX)⁻¹ Xᵀy
//! ```
//!
//! **Key properties:**
//! - Exact recovery of a noiseless linear model (up to floating point)
//! - Residuals sum to zero whenever the model includes an intercept
//! - Estimation error shrinks roughly as 1/√N with the sample count
//!
//! ## Quick Start
//!
//! ### Fitting your own data
//!
//! ```rust
//! use ols_rs::prelude::*;
//!
//! let x: Vec<f64> = vec![0.0, 1.0, 2.0, 3.0];
//! let y: Vec<f64> = vec![1.0, 3.0, 5.0, 7.0]; // y = 2x + 1, exactly
//!
//! // Build the model
//! let model = Ols::new()
//!     .return_diagnostics()
//!     .build()?;
//!
//! // Fit the model to the data
//! let result = model.fit(&x, &y)?;
//!
//! // Coefficients are ordered feature-first, intercept last
//! assert!((result.coefficients[0] - 2.0).abs() < 1e-8);
//! assert!((result.coefficients[1] - 1.0).abs() < 1e-8);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ### Running a synthetic study
//!
//! The `Study` builder runs the whole pipeline in one call: generate
//! uniform features in [0, 1), synthesize responses from a true linear
//! model plus Gaussian noise, fit, and diagnose.
//!
//! ```rust
//! use ols_rs::prelude::*;
//!
//! let study = Study::new()
//!     .samples(100)                    // N
//!     .features(1)                     // D
//!     .noise_scale(0.5)                // Gaussian noise std dev
//!     .true_coefficients(&[2.0, 1.0])  // slope 2, intercept 1
//!     .seed(42)                        // reproducible draws
//!     .return_diagnostics()
//!     .build()?;
//!
//! let outcome = study.run()?;
//!
//! // Estimates land near the true coefficients
//! println!("{}", outcome.result);
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! ### Result and Error Handling
//!
//! Fallible operations return `Result<_, OlsError>`, and the `?` operator
//! is idiomatic:
//!
//! ```rust
//! use ols_rs::prelude::*;
//! # let x = vec![0.0, 1.0, 2.0, 3.0];
//! # let y = vec![1.0, 3.0, 5.0, 7.0];
//!
//! let model = Ols::new().build()?;
//!
//! match model.fit(&x, &y) {
//!     Ok(result) => {
//!         println!("Estimated: {:?}", result.coefficients);
//!     }
//!     Err(e) => {
//!         eprintln!("Fitting failed: {}", e);
//!     }
//! }
//! # Result::<(), OlsError>::Ok(())
//! ```
//!
//! A design without full column rank (fewer samples than parameters, or a
//! degenerate feature column) fails loudly:
//!
//! ```rust
//! use ols_rs::prelude::*;
//!
//! let study = Study::<f64>::new()
//!     .samples(1) // one sample cannot determine two parameters
//!     .build();
//!
//! assert!(matches!(
//!     study,
//!     Err(OlsError::SingularDesignMatrix { samples: 1, parameters: 2 })
//! ));
//! # Ok::<(), OlsError>(())
//! ```
//!
//! ## Parameters
//!
//! All builder parameters have sensible defaults. You only need to specify
//! what you want to change.
//!
//! | Parameter             | Default      | Range        | Description                               | Builder |
//! |-----------------------|--------------|--------------|-------------------------------------------|---------|
//! | **samples**           | 100          | [1, ∞)       | Number of samples to generate             | Study   |
//! | **features**          | 1            | [0, ∞)       | Number of uniform predictor features      | Study   |
//! | **noise_scale**       | 0.5          | [0, ∞)       | Std dev of additive Gaussian noise        | Study   |
//! | **true_coefficients** | `[2, 1]`     | finite       | True model, intercept last                | Study   |
//! | **seed**              | OS entropy   | u64          | RNG seed for reproducible generation      | Study   |
//! | **dimensions**        | 1            | [0, ∞)       | Predictor values per sample in `fit`      | Ols     |
//! | **variance_estimator**| `Population` | 2 options    | Divisor for diagnostic variances          | Both    |
//! | **return_diagnostics**| off          | —            | Include R², RMSE, MAE, residual SD        | Both    |
//!
//! The variance estimator applies to both the residual and the response
//! variance, so R² = 1 − residual var / response var is always a ratio of
//! like quantities.
//!
//! ## Minimal Usage (no_std)
//!
//! The crate supports `no_std` environments. Disable default features to
//! remove the standard library dependency:
//!
//! ```toml
//! [dependencies]
//! ols_rs = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, unseeded studies fall back to a fixed documented seed
//! (there is no OS entropy source), and CSV export is unavailable.
//!
//! ## References
//!
//! - Seber, G. A. F. & Lee, A. J. (2003). "Linear Regression Analysis"
//! - Draper, N. R. & Smith, H. (1998). "Applied Regression Analysis"
//!
//! ## License
//!
//! See the repository for license information and contribution guidelines.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

#[cfg(not(feature = "std"))]
#[macro_use]
extern crate alloc;

// ============================================================================
// Internal Modules
// ============================================================================

// Layer 1: Primitives - data structures and basic utilities.
//
// Contains the crate error type and the design matrix.
mod primitives;

// Layer 2: Math - pure mathematical functions.
//
// Contains the nalgebra-backed linear algebra bridge and the mean/variance
// estimators.
mod math;

// Layer 3: Algorithms - core procedures.
//
// Contains synthetic linear scenario generation and the closed-form OLS
// solver.
mod algorithms;

// Layer 4: Evaluation - post-processing and diagnostics.
//
// Contains residual summaries and the proportion of explained variance.
mod evaluation;

// Layer 5: Engine - orchestration and execution control.
//
// Contains parameter validation, the pipeline executor, and result types.
mod engine;

// High-level fluent API.
//
// Provides the `Ols` and `Study` builders.
mod api;

// ============================================================================
// Prelude
// ============================================================================

/// Standard prelude.
///
/// This module is intended to be wildcard-imported for convenient access
/// to the most commonly used types:
///
/// ```
/// use ols_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{
        DesignMatrix, Diagnostics, FloatLinalg, FloatSample, LinearScenario,
        OlsBuilder as Ols, OlsError, OlsModel, OlsResult, OlsStudy, PlotData,
        StudyBuilder as Study, StudyOutcome, SyntheticData, VarianceEstimator,
        VarianceEstimator::{Population, Sample},
    };
}

// ============================================================================
// Testing re-exports
// ============================================================================

/// Internal modules for development and testing.
///
/// This module re-exports internal modules for development and testing
/// purposes. It is only available with the `dev` feature enabled.
///
/// **Warning**: These are internal implementation details and may change
/// without notice. Do not use in production code.
#[cfg(feature = "dev")]
pub mod internals {
    /// Internal primitive types and utilities.
    pub mod primitives {
        pub use crate::primitives::*;
    }
    /// Internal math functions.
    pub mod math {
        pub use crate::math::*;
    }
    /// Internal core algorithms.
    pub mod algorithms {
        pub use crate::algorithms::*;
    }
    /// Internal evaluation and diagnostics.
    pub mod evaluation {
        pub use crate::evaluation::*;
    }
    /// Internal execution engine.
    pub mod engine {
        pub use crate::engine::*;
    }
    /// Internal API.
    pub mod api {
        pub use crate::api::*;
    }
}
