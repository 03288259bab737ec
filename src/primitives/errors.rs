//! Error types for OLS fitting and scenario generation.
//!
//! ## Purpose
//!
//! This module defines [`OlsError`], the single error type returned by every
//! fallible operation in the crate: parameter validation, data generation,
//! fitting, and diagnostics.
//!
//! ## Design notes
//!
//! * **Granular variants**: Each validation failure has its own variant so
//!   callers can match on the exact cause.
//! * **Immediate propagation**: Errors are local to one pipeline invocation;
//!   there is no partial-failure or retry state to represent.
//! * **no_std**: `Display` is implemented over `core::fmt`; the
//!   `std::error::Error` impl is feature-gated.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;

use core::fmt;

// ============================================================================
// OlsError
// ============================================================================

/// Errors produced by parameter validation, generation, and fitting.
#[derive(Debug, Clone, PartialEq)]
pub enum OlsError {
    /// Input arrays are empty.
    EmptyInput,

    /// Flattened predictor length is inconsistent with the response length.
    MismatchedInputs {
        /// Length of the flattened predictor array.
        x_len: usize,
        /// Length of the response array.
        y_len: usize,
    },

    /// An array has a different length than the pipeline stage expects.
    DimensionMismatch {
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Sample count outside the accepted range.
    InvalidSampleCount(usize),

    /// Noise scale is negative or non-finite.
    InvalidNoiseScale(f64),

    /// True coefficient vector has the wrong length for the feature count.
    InvalidCoefficientCount {
        /// Actual number of coefficients supplied.
        got: usize,
        /// Expected number of coefficients (features + 1).
        expected: usize,
    },

    /// A NaN or infinite value was found in the input.
    InvalidNumericValue(String),

    /// The design matrix does not have full column rank, so the
    /// least-squares problem has no unique solution.
    SingularDesignMatrix {
        /// Number of samples (rows of the sample-by-parameter matrix).
        samples: usize,
        /// Number of parameters (features + 1).
        parameters: usize,
    },

    /// A builder parameter was configured more than once.
    DuplicateParameter {
        /// Name of the offending parameter.
        parameter: &'static str,
    },
}

impl fmt::Display for OlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OlsError::EmptyInput => write!(f, "Input arrays are empty"),
            OlsError::MismatchedInputs { x_len, y_len } => {
                write!(f, "Length mismatch: x has {} values, y has {}", x_len, y_len)
            }
            OlsError::DimensionMismatch { expected, got } => {
                write!(f, "Dimension mismatch: expected {}, got {}", expected, got)
            }
            OlsError::InvalidSampleCount(n) => {
                write!(f, "Invalid sample count: {} (must be at least 1)", n)
            }
            OlsError::InvalidNoiseScale(eps) => {
                write!(
                    f,
                    "Invalid noise scale: {} (must be finite and >= 0)",
                    eps
                )
            }
            OlsError::InvalidCoefficientCount { got, expected } => {
                write!(
                    f,
                    "Invalid coefficient count: got {}, need {} (features + 1)",
                    got, expected
                )
            }
            OlsError::InvalidNumericValue(detail) => {
                write!(f, "Invalid numeric value: {}", detail)
            }
            OlsError::SingularDesignMatrix {
                samples,
                parameters,
            } => {
                write!(
                    f,
                    "Singular design matrix: {} samples, {} parameters (design must have full column rank)",
                    samples, parameters
                )
            }
            OlsError::DuplicateParameter { parameter } => {
                write!(
                    f,
                    "Parameter '{}' was set multiple times. Each parameter can only be configured once.",
                    parameter
                )
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OlsError {}
