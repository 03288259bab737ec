//! Pipeline execution and result assembly.
//!
//! ## Purpose
//!
//! This module runs the fit stage of the pipeline: estimate coefficients,
//! evaluate fitted values, derive residuals, and optionally attach
//! diagnostics. It is the single place where the layers below are wired
//! together.
//!
//! ## Key concepts
//!
//! * **Linear pipeline**: fit → predict → residuals → diagnostics, with no
//!   branching, retries, or persistent state.
//! * **Residuals always computed**: they are cheap and part of the result
//!   contract; only the diagnostic summary is opt-in.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// Internal dependencies
use crate::algorithms::ols::OlsSolver;
use crate::engine::output::OlsResult;
use crate::evaluation::diagnostics::Diagnostics;
use crate::math::linalg::FloatLinalg;
use crate::math::stats::VarianceEstimator;
use crate::primitives::errors::OlsError;
use crate::primitives::matrix::DesignMatrix;

// ============================================================================
// Fit Configuration
// ============================================================================

/// Configuration for one fit execution.
#[derive(Debug, Clone, Copy, Default)]
pub struct FitConfig {
    /// Variance estimator used by the diagnostics stage.
    pub variance_estimator: VarianceEstimator,

    /// Whether to compute the diagnostic summary.
    pub return_diagnostics: bool,
}

// ============================================================================
// Executor
// ============================================================================

/// Runs the fit pipeline over a design matrix and response vector.
pub struct OlsExecutor;

impl OlsExecutor {
    /// Execute fit → predict → residuals (→ diagnostics) and assemble the
    /// result.
    pub fn run<T: FloatLinalg>(
        design: &DesignMatrix<T>,
        response: &[T],
        config: &FitConfig,
    ) -> Result<OlsResult<T>, OlsError> {
        let coefficients = OlsSolver::fit(design, response)?;
        let fitted = OlsSolver::predict(design, &coefficients)?;

        let residuals: Vec<T> = response
            .iter()
            .zip(fitted.iter())
            .map(|(&obs, &fit)| obs - fit)
            .collect();

        let diagnostics = if config.return_diagnostics {
            Some(Diagnostics::compute(
                response,
                &fitted,
                &residuals,
                config.variance_estimator,
            ))
        } else {
            None
        };

        Ok(OlsResult {
            coefficients,
            fitted,
            residuals,
            variance_estimator: config.variance_estimator,
            diagnostics,
        })
    }
}
