//! Residual and variance-explained diagnostics.
//!
//! ## Purpose
//!
//! This module summarizes a completed fit: residual location and spread,
//! error magnitudes, and the proportion of response variance the model
//! explains (R²).
//!
//! ## Key concepts
//!
//! * **Estimator consistency**: R² divides the residual variance by the
//!   response variance; both are computed with the same
//!   [`VarianceEstimator`] so the ratio is well defined.
//! * **Degenerate responses**: a constant response has zero variance. R²
//!   is defined as 1 when the residual variance is also zero (the constant
//!   was fitted exactly, which an intercept always allows) and 0 otherwise.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::math::stats::{mean, VarianceEstimator};

// ============================================================================
// Diagnostics
// ============================================================================

/// Diagnostic statistics for a completed fit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Diagnostics<T> {
    /// Proportion of explained variance, 1 − residual var / response var.
    pub r_squared: T,

    /// Root mean squared error of the fit.
    pub rmse: T,

    /// Mean absolute error of the fit.
    pub mae: T,

    /// Mean of the residuals (near zero for models with an intercept).
    pub residual_mean: T,

    /// Standard deviation of the residuals.
    pub residual_sd: T,

    /// Variance of the response vector.
    pub response_variance: T,

    /// Variance of the residual vector.
    pub residual_variance: T,
}

impl<T: Float> Diagnostics<T> {
    /// Compute diagnostics from the response, fitted values, and residuals.
    pub fn compute(
        response: &[T],
        fitted: &[T],
        residuals: &[T],
        estimator: VarianceEstimator,
    ) -> Self {
        debug_assert_eq!(response.len(), fitted.len());
        debug_assert_eq!(response.len(), residuals.len());

        let n = T::from(response.len().max(1)).unwrap();

        let sse = residuals.iter().fold(T::zero(), |acc, &r| acc + r * r);
        let rmse = (sse / n).sqrt();

        let sae = residuals.iter().fold(T::zero(), |acc, &r| acc + r.abs());
        let mae = sae / n;

        let residual_mean = mean(residuals);
        let residual_variance = estimator.variance(residuals);
        let residual_sd = residual_variance.sqrt();
        let response_variance = estimator.variance(response);

        let r_squared = if response_variance > T::zero() {
            T::one() - residual_variance / response_variance
        } else if residual_variance == T::zero() {
            T::one()
        } else {
            T::zero()
        };

        Self {
            r_squared,
            rmse,
            mae,
            residual_mean,
            residual_sd,
            response_variance,
            residual_variance,
        }
    }
}
