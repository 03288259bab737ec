//! Input validation for scenario configuration and fit data.
//!
//! ## Purpose
//!
//! This module provides validation functions for scenario parameters and
//! input data. It checks requirements such as input lengths, finite values,
//! and parameter bounds.
//!
//! ## Design notes
//!
//! * **Fail-Fast**: Validation stops at the first error encountered.
//! * **Efficiency**: Checks are ordered from cheap to expensive.
//! * **Generics**: Validation is generic over `Float` types.
//!
//! ## Invariants
//!
//! * All validated inputs satisfy their respective mathematical constraints.
//! * Validation logic is deterministic and side-effect free.
//!
//! ## Non-goals
//!
//! * This module does not transform or correct invalid inputs.
//! * This module does not generate data or perform the fit itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::format;

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::OlsError;

// ============================================================================
// Validator
// ============================================================================

/// Validation utility for scenario configuration and fit input data.
///
/// Provides static methods returning `Result<(), OlsError>` that fail fast
/// upon identifying the first violation.
pub struct Validator;

impl Validator {
    // ========================================================================
    // Core Input Validation
    // ========================================================================

    /// Validate input arrays for fitting.
    ///
    /// `x` is flattened sample-major with `dimensions` predictor values per
    /// sample; `y` holds one response per sample.
    pub fn validate_inputs<T: Float>(
        x: &[T],
        y: &[T],
        dimensions: usize,
    ) -> Result<(), OlsError> {
        // Check 1: Non-empty arrays (a zero-dimension model still needs y)
        if y.is_empty() || (dimensions > 0 && x.is_empty()) {
            return Err(OlsError::EmptyInput);
        }

        // Check 2: Matching lengths (x.len() should be y.len() * dimensions)
        let n_y = y.len();
        if x.len() != n_y * dimensions {
            return Err(OlsError::MismatchedInputs {
                x_len: x.len(),
                y_len: n_y,
            });
        }

        // Check 3: All values finite
        for (i, &val) in x.iter().enumerate() {
            if !val.is_finite() {
                return Err(OlsError::InvalidNumericValue(format!(
                    "x[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }
        for (i, &val) in y.iter().enumerate() {
            if !val.is_finite() {
                return Err(OlsError::InvalidNumericValue(format!(
                    "y[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    // ========================================================================
    // Parameter Validation
    // ========================================================================

    /// Validate the scenario sample count.
    pub fn validate_samples(samples: usize) -> Result<(), OlsError> {
        if samples == 0 {
            return Err(OlsError::InvalidSampleCount(samples));
        }
        Ok(())
    }

    /// Validate the Gaussian noise scale.
    pub fn validate_noise_scale<T: Float>(noise_scale: T) -> Result<(), OlsError> {
        if !noise_scale.is_finite() || noise_scale < T::zero() {
            return Err(OlsError::InvalidNoiseScale(
                noise_scale.to_f64().unwrap_or(f64::NAN),
            ));
        }
        Ok(())
    }

    /// Validate the true coefficient vector against the feature count.
    ///
    /// The vector must hold `features + 1` finite values (intercept last).
    pub fn validate_coefficients<T: Float>(
        coefficients: &[T],
        features: usize,
    ) -> Result<(), OlsError> {
        if coefficients.len() != features + 1 {
            return Err(OlsError::InvalidCoefficientCount {
                got: coefficients.len(),
                expected: features + 1,
            });
        }

        for (i, &val) in coefficients.iter().enumerate() {
            if !val.is_finite() {
                return Err(OlsError::InvalidNumericValue(format!(
                    "coefficients[{}]={}",
                    i,
                    val.to_f64().unwrap_or(f64::NAN)
                )));
            }
        }

        Ok(())
    }

    /// Validate that a design of the given shape can have full column rank.
    pub fn validate_solvable(samples: usize, parameters: usize) -> Result<(), OlsError> {
        if samples < parameters {
            return Err(OlsError::SingularDesignMatrix {
                samples,
                parameters,
            });
        }
        Ok(())
    }

    /// Validate that no parameters were set multiple times in a builder.
    pub fn validate_no_duplicates(duplicate_param: Option<&'static str>) -> Result<(), OlsError> {
        if let Some(param) = duplicate_param {
            return Err(OlsError::DuplicateParameter { parameter: param });
        }
        Ok(())
    }
}
