//! Synthetic linear scenario generation.
//!
//! ## Purpose
//!
//! This module generates the data the demonstration pipeline fits: a design
//! matrix of i.i.d. uniform features in [0, 1) plus an intercept row, and a
//! response vector following a caller-supplied linear model with additive
//! Gaussian noise.
//!
//! ## Design notes
//!
//! * **Reseedable**: every scenario can carry an explicit seed; repeated
//!   runs with the same seed reproduce the same data exactly.
//! * **Exact at zero noise**: when the noise scale is 0 no noise term is
//!   added, so responses lie exactly on the linear model and a fit recovers
//!   the true coefficients up to floating-point precision.
//! * **Generics**: sampling is generic over `FloatSample` types (f32 and
//!   f64) which delegate to the rand/rand_distr samplers.
//!
//! ## Invariants
//!
//! * Generated features are in [0, 1).
//! * The true coefficient vector has length `features + 1`, intercept last.
//!
//! ## Non-goals
//!
//! * This module does not fit anything and does not validate parameters
//!   (the engine validator runs before generation).

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

// External dependencies
use num_traits::Float;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Normal};

// Internal dependencies
use crate::primitives::errors::OlsError;
use crate::primitives::matrix::DesignMatrix;

/// Seed used when no seed is given and no OS entropy source is available.
#[cfg(not(feature = "std"))]
const DEFAULT_SEED: u64 = 0x015d_5eed;

// ============================================================================
// FloatSample Trait
// ============================================================================

/// Helper trait to bridge generic Float types to the rand samplers.
pub trait FloatSample: Float {
    /// Draw `n` i.i.d. uniform values in [0, 1).
    fn uniform_vec<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<Self>;

    /// Draw `n` i.i.d. Gaussian values with mean 0 and the given standard
    /// deviation. A zero standard deviation yields exact zeros.
    fn gaussian_vec<R: Rng + ?Sized>(rng: &mut R, std_dev: Self, n: usize) -> Vec<Self>;
}

impl FloatSample for f64 {
    fn uniform_vec<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f64> {
        (0..n).map(|_| rng.random::<f64>()).collect()
    }

    fn gaussian_vec<R: Rng + ?Sized>(rng: &mut R, std_dev: f64, n: usize) -> Vec<f64> {
        if std_dev == 0.0 {
            return vec![0.0; n];
        }
        // Scale is validated finite and non-negative before generation.
        let noise = Normal::new(0.0, std_dev).unwrap();
        (0..n).map(|_| noise.sample(rng)).collect()
    }
}

impl FloatSample for f32 {
    fn uniform_vec<R: Rng + ?Sized>(rng: &mut R, n: usize) -> Vec<f32> {
        (0..n).map(|_| rng.random::<f32>()).collect()
    }

    fn gaussian_vec<R: Rng + ?Sized>(rng: &mut R, std_dev: f32, n: usize) -> Vec<f32> {
        if std_dev == 0.0 {
            return vec![0.0; n];
        }
        let noise = Normal::new(0.0, std_dev).unwrap();
        (0..n).map(|_| noise.sample(rng)).collect()
    }
}

// ============================================================================
// Linear Scenario
// ============================================================================

/// Configuration of one synthetic linear scenario.
///
/// The feature count is implied by the coefficient vector: with
/// `coefficients.len() == d + 1`, the scenario has `d` uniform features and
/// an intercept (the last coefficient).
#[derive(Debug, Clone, PartialEq)]
pub struct LinearScenario<T> {
    /// Number of samples to generate.
    pub samples: usize,

    /// True coefficients, feature coefficients first, intercept last.
    pub coefficients: Vec<T>,

    /// Standard deviation of the additive Gaussian noise.
    pub noise_scale: T,

    /// RNG seed; `None` draws one from OS entropy (std builds).
    pub seed: Option<u64>,
}

/// Generated scenario data: design matrix and noisy responses.
#[derive(Debug, Clone, PartialEq)]
pub struct SyntheticData<T> {
    /// Design matrix, `features + 1` rows by `samples` columns.
    pub design: DesignMatrix<T>,

    /// Response vector, one value per sample.
    pub response: Vec<T>,
}

impl<T: FloatSample> LinearScenario<T> {
    /// Number of predictor features (coefficient count minus intercept).
    #[inline]
    pub fn features(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    /// Generate the design matrix and response vector for this scenario.
    ///
    /// Inputs are assumed validated (samples >= 1, noise scale finite and
    /// non-negative, at least one coefficient).
    pub fn generate(&self) -> Result<SyntheticData<T>, OlsError> {
        let n = self.samples;
        let d = self.features();
        let mut rng = self.make_rng();

        let features = T::uniform_vec(&mut rng, d * n);
        let design = DesignMatrix::from_feature_rows(features, d, n)?;

        let noise = T::gaussian_vec(&mut rng, self.noise_scale, n);
        let mut response = Vec::with_capacity(n);
        for (j, &e) in noise.iter().enumerate() {
            let signal = design.sample_dot(j, &self.coefficients)?;
            response.push(signal + e);
        }

        Ok(SyntheticData { design, response })
    }

    #[cfg(feature = "std")]
    fn make_rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    #[cfg(not(feature = "std"))]
    fn make_rng(&self) -> StdRng {
        StdRng::seed_from_u64(self.seed.unwrap_or(DEFAULT_SEED))
    }
}
