#![cfg(feature = "dev")]
//! Tests for residual and variance-explained diagnostics.
//!
//! These tests verify:
//! - Exact values on hand-computed cases
//! - R² endpoints for perfect and uninformative fits
//! - Estimator consistency between the two variances

use approx::assert_relative_eq;

use ols_rs::internals::evaluation::diagnostics::Diagnostics;
use ols_rs::internals::math::stats::VarianceEstimator;

// ============================================================================
// Endpoint Tests
// ============================================================================

/// A perfect fit has R² = 1 and zero error measures.
#[test]
fn test_perfect_fit() {
    let response = [1.0, 2.0, 3.0, 4.0];
    let fitted = response;
    let residuals = [0.0; 4];

    let diag = Diagnostics::compute(
        &response,
        &fitted,
        &residuals,
        VarianceEstimator::Population,
    );

    assert_relative_eq!(diag.r_squared, 1.0);
    assert_relative_eq!(diag.rmse, 0.0);
    assert_relative_eq!(diag.mae, 0.0);
    assert_relative_eq!(diag.residual_sd, 0.0);
}

/// Fitting only the mean explains no variance: R² = 0.
#[test]
fn test_mean_only_fit() {
    let response = [1.0, 2.0, 3.0, 4.0];
    let fitted = [2.5; 4];
    let residuals = [-1.5, -0.5, 0.5, 1.5];

    let diag = Diagnostics::compute(
        &response,
        &fitted,
        &residuals,
        VarianceEstimator::Population,
    );

    // Residual variance equals response variance here.
    assert_relative_eq!(diag.r_squared, 0.0, epsilon = 1e-12);
    assert_relative_eq!(diag.residual_variance, diag.response_variance);
}

/// A constant response fitted exactly is defined to have R² = 1.
#[test]
fn test_constant_response_exact_fit() {
    let response = [3.0; 5];
    let fitted = [3.0; 5];
    let residuals = [0.0; 5];

    let diag = Diagnostics::compute(
        &response,
        &fitted,
        &residuals,
        VarianceEstimator::Population,
    );

    assert_relative_eq!(diag.r_squared, 1.0);
}

/// A constant response fitted badly is defined to have R² = 0.
#[test]
fn test_constant_response_bad_fit() {
    let response = [3.0; 4];
    let fitted = [1.0, 5.0, 1.0, 5.0];
    let residuals = [2.0, -2.0, 2.0, -2.0];

    let diag = Diagnostics::compute(
        &response,
        &fitted,
        &residuals,
        VarianceEstimator::Population,
    );

    assert_relative_eq!(diag.r_squared, 0.0);
}

// ============================================================================
// Hand-Computed Cases
// ============================================================================

/// Error measures on a small hand-computed case.
///
/// Residuals [1, -1, 1, -1]: RMSE = 1, MAE = 1, mean 0, population
/// variance 1.
#[test]
fn test_error_measures() {
    let response = [2.0, 1.0, 4.0, 3.0];
    let fitted = [1.0, 2.0, 3.0, 4.0];
    let residuals = [1.0, -1.0, 1.0, -1.0];

    let diag = Diagnostics::compute(
        &response,
        &fitted,
        &residuals,
        VarianceEstimator::Population,
    );

    assert_relative_eq!(diag.rmse, 1.0);
    assert_relative_eq!(diag.mae, 1.0);
    assert_relative_eq!(diag.residual_mean, 0.0);
    assert_relative_eq!(diag.residual_variance, 1.0);
    assert_relative_eq!(diag.residual_sd, 1.0);
}

/// RMSE accounts for non-centered residuals, variance does not.
///
/// Residuals [2, 2, 2, 2]: RMSE = 2 but variance = 0.
#[test]
fn test_biased_residuals() {
    let response = [3.0, 3.0, 3.0, 3.0];
    let fitted = [1.0, 1.0, 1.0, 1.0];
    let residuals = [2.0, 2.0, 2.0, 2.0];

    let diag = Diagnostics::compute(
        &response,
        &fitted,
        &residuals,
        VarianceEstimator::Population,
    );

    assert_relative_eq!(diag.rmse, 2.0);
    assert_relative_eq!(diag.residual_mean, 2.0);
    assert_relative_eq!(diag.residual_variance, 0.0);
}

// ============================================================================
// Estimator Consistency
// ============================================================================

/// Both variances use the requested estimator, so R² is identical under
/// either choice (the n or n-1 divisor cancels in the ratio).
#[test]
fn test_estimator_consistency() {
    let response = [1.0, 3.0, 2.0, 5.0, 4.0];
    let fitted = [1.5, 2.5, 2.5, 4.5, 4.0];
    let residuals = [-0.5, 0.5, -0.5, 0.5, 0.0];

    let pop = Diagnostics::compute(
        &response,
        &fitted,
        &residuals,
        VarianceEstimator::Population,
    );
    let sample = Diagnostics::compute(
        &response,
        &fitted,
        &residuals,
        VarianceEstimator::Sample,
    );

    // Individual variances differ by the divisor...
    assert!(sample.response_variance > pop.response_variance);
    // ...but the explained-variance ratio does not.
    assert_relative_eq!(pop.r_squared, sample.r_squared, epsilon = 1e-12);
}
