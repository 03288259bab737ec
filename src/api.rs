//! High-level API for OLS fitting and synthetic studies.
//!
//! ## Purpose
//!
//! This module provides the primary user-facing entry points: a fluent
//! builder for fitting caller-supplied data ([`OlsBuilder`]) and one for
//! running the full synthetic pipeline (generate, fit, diagnose) in a
//! single call ([`StudyBuilder`]).
//!
//! ## Design notes
//!
//! * **Ergonomic**: Fluent builders with sensible defaults for all
//!   parameters.
//! * **Validated**: Parameters are validated when `.build()` is called;
//!   setting a parameter twice is rejected.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ### Configuration Flow
//!
//! 1. Create a builder via `Ols::new()` or `Study::new()`.
//! 2. Chain configuration methods (`.samples()`, `.noise_scale()`, etc.).
//! 3. Call `.build()` to validate and obtain the processor.
//! 4. Call `.fit(&x, &y)` (model) or `.run()` (study).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use core::fmt::Debug;

// Internal dependencies
use crate::engine::executor::{FitConfig, OlsExecutor};
use crate::engine::validator::Validator;

// Publicly re-exported types
pub use crate::algorithms::synthesis::{FloatSample, LinearScenario, SyntheticData};
pub use crate::engine::output::{OlsResult, PlotData, StudyOutcome};
pub use crate::evaluation::diagnostics::Diagnostics;
pub use crate::math::linalg::FloatLinalg;
pub use crate::math::stats::VarianceEstimator;
pub use crate::primitives::errors::OlsError;
pub use crate::primitives::matrix::DesignMatrix;

// ============================================================================
// OLS Model Builder
// ============================================================================

/// Fluent builder for fitting caller-supplied data.
#[derive(Debug, Clone)]
pub struct OlsBuilder {
    /// Number of predictor dimensions per sample.
    pub dimensions: Option<usize>,

    /// Variance estimator for diagnostics.
    pub variance_estimator: Option<VarianceEstimator>,

    /// Enable the diagnostic summary in the result.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl Default for OlsBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl OlsBuilder {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            dimensions: None,
            variance_estimator: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the number of predictor dimensions per sample (default: 1).
    pub fn dimensions(mut self, dimensions: usize) -> Self {
        if self.dimensions.is_some() {
            self.duplicate_param = Some("dimensions");
        }
        self.dimensions = Some(dimensions);
        self
    }

    /// Set the variance estimator for diagnostics (default: Population).
    pub fn variance_estimator(mut self, estimator: VarianceEstimator) -> Self {
        if self.variance_estimator.is_some() {
            self.duplicate_param = Some("variance_estimator");
        }
        self.variance_estimator = Some(estimator);
        self
    }

    /// Enable the diagnostic summary in the result.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and build the model.
    pub fn build(self) -> Result<OlsModel, OlsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        Ok(OlsModel {
            dimensions: self.dimensions.unwrap_or(1),
            config: FitConfig {
                variance_estimator: self.variance_estimator.unwrap_or_default(),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// OLS Model
// ============================================================================

/// Configured ordinary least squares model.
#[derive(Debug, Clone)]
pub struct OlsModel {
    dimensions: usize,
    config: FitConfig,
}

impl OlsModel {
    /// Fit the model to the provided data.
    ///
    /// `x` is flattened sample-major (`[x1_0, x2_0, x1_1, x2_1, ...]` for
    /// two dimensions); `y` holds one response per sample. An intercept
    /// column is always included in the design.
    pub fn fit<T: FloatLinalg + Debug>(
        &self,
        x: &[T],
        y: &[T],
    ) -> Result<OlsResult<T>, OlsError> {
        Validator::validate_inputs(x, y, self.dimensions)?;

        let n = y.len();
        let design = DesignMatrix::from_observations(x, self.dimensions, n)?;
        Validator::validate_solvable(design.samples(), design.parameters())?;

        OlsExecutor::run(&design, y, &self.config)
    }
}

// ============================================================================
// Study Builder
// ============================================================================

/// Fluent builder for the full synthetic pipeline.
///
/// Defaults reproduce the canonical demonstration: 100 samples of one
/// uniform feature, true model `y = 2x + 1`, Gaussian noise with standard
/// deviation 0.5.
#[derive(Debug, Clone)]
pub struct StudyBuilder<T: FloatLinalg + FloatSample> {
    /// Number of samples to generate.
    pub samples: Option<usize>,

    /// Number of predictor features.
    pub features: Option<usize>,

    /// Standard deviation of the additive Gaussian noise.
    pub noise_scale: Option<T>,

    /// True coefficients, feature coefficients first, intercept last.
    pub true_coefficients: Option<Vec<T>>,

    /// RNG seed for reproducible data generation.
    pub seed: Option<u64>,

    /// Variance estimator for diagnostics.
    pub variance_estimator: Option<VarianceEstimator>,

    /// Enable the diagnostic summary in the result.
    pub return_diagnostics: Option<bool>,

    /// Tracks if any parameter was set multiple times (for validation).
    #[doc(hidden)]
    pub duplicate_param: Option<&'static str>,
}

impl<T: FloatLinalg + FloatSample + Debug> Default for StudyBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: FloatLinalg + FloatSample + Debug> StudyBuilder<T> {
    /// Create a new builder with default settings.
    pub fn new() -> Self {
        Self {
            samples: None,
            features: None,
            noise_scale: None,
            true_coefficients: None,
            seed: None,
            variance_estimator: None,
            return_diagnostics: None,
            duplicate_param: None,
        }
    }

    /// Set the number of samples to generate (default: 100).
    pub fn samples(mut self, samples: usize) -> Self {
        if self.samples.is_some() {
            self.duplicate_param = Some("samples");
        }
        self.samples = Some(samples);
        self
    }

    /// Set the number of predictor features (default: 1).
    pub fn features(mut self, features: usize) -> Self {
        if self.features.is_some() {
            self.duplicate_param = Some("features");
        }
        self.features = Some(features);
        self
    }

    /// Set the noise standard deviation (default: 0.5).
    pub fn noise_scale(mut self, noise_scale: T) -> Self {
        if self.noise_scale.is_some() {
            self.duplicate_param = Some("noise_scale");
        }
        self.noise_scale = Some(noise_scale);
        self
    }

    /// Set the true coefficients, intercept last (default: `[2, 1]`).
    pub fn true_coefficients(mut self, coefficients: &[T]) -> Self {
        if self.true_coefficients.is_some() {
            self.duplicate_param = Some("true_coefficients");
        }
        self.true_coefficients = Some(coefficients.to_vec());
        self
    }

    /// Seed the data generator for reproducible runs.
    pub fn seed(mut self, seed: u64) -> Self {
        if self.seed.is_some() {
            self.duplicate_param = Some("seed");
        }
        self.seed = Some(seed);
        self
    }

    /// Set the variance estimator for diagnostics (default: Population).
    pub fn variance_estimator(mut self, estimator: VarianceEstimator) -> Self {
        if self.variance_estimator.is_some() {
            self.duplicate_param = Some("variance_estimator");
        }
        self.variance_estimator = Some(estimator);
        self
    }

    /// Enable the diagnostic summary in the result.
    pub fn return_diagnostics(mut self) -> Self {
        if self.return_diagnostics.is_some() {
            self.duplicate_param = Some("return_diagnostics");
        }
        self.return_diagnostics = Some(true);
        self
    }

    /// Validate the configuration and build the study.
    pub fn build(self) -> Result<OlsStudy<T>, OlsError> {
        Validator::validate_no_duplicates(self.duplicate_param)?;

        let samples = self.samples.unwrap_or(100);
        let features = self.features.unwrap_or(1);
        let noise_scale = self.noise_scale.unwrap_or_else(|| T::from(0.5).unwrap());
        let coefficients = self
            .true_coefficients
            .unwrap_or_else(|| vec![T::from(2.0).unwrap(), T::one()]);

        Validator::validate_samples(samples)?;
        Validator::validate_noise_scale(noise_scale)?;
        Validator::validate_coefficients(&coefficients, features)?;
        Validator::validate_solvable(samples, features + 1)?;

        Ok(OlsStudy {
            scenario: LinearScenario {
                samples,
                coefficients,
                noise_scale,
                seed: self.seed,
            },
            config: FitConfig {
                variance_estimator: self.variance_estimator.unwrap_or_default(),
                return_diagnostics: self.return_diagnostics.unwrap_or(false),
            },
        })
    }
}

// ============================================================================
// OLS Study
// ============================================================================

/// Configured synthetic study: generate, fit, diagnose.
#[derive(Debug, Clone)]
pub struct OlsStudy<T: FloatLinalg + FloatSample> {
    scenario: LinearScenario<T>,
    config: FitConfig,
}

impl<T: FloatLinalg + FloatSample + Debug> OlsStudy<T> {
    /// The scenario this study will generate data from.
    pub fn scenario(&self) -> &LinearScenario<T> {
        &self.scenario
    }

    /// Run the pipeline: generate synthetic data, fit it, and assemble the
    /// outcome.
    pub fn run(&self) -> Result<StudyOutcome<T>, OlsError> {
        let data = self.scenario.generate()?;
        let result = OlsExecutor::run(&data.design, &data.response, &self.config)?;

        Ok(StudyOutcome { data, result })
    }
}
