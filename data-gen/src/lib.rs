//! Synthetic observations drawn around a fixed linear ground truth

#[macro_use]
extern crate log;

use common::{ObservationSet, NUM_COEFFICIENTS};
use nanorand::{Rng, WyRand};

mod params;

pub use params::Params;

/// Coefficients `[intercept, b1, b2, b3]` the targets are generated from
pub const TRUE_COEFFICIENTS: [f64; NUM_COEFFICIENTS] = [2.0, 1.0, 0.5, 0.1];

/// Features are drawn uniformly from `[-FEATURE_BOUND, FEATURE_BOUND]`
pub const FEATURE_BOUND: f64 = 5.0;

/// Noise is drawn uniformly from `[-NOISE_BOUND, NOISE_BOUND]`
pub const NOISE_BOUND: f64 = 1.5;

/// Default number of observations in a generated set
pub const DEFAULT_NUM_OBSERVATIONS: usize = 50;

/// Generates observation sets from `TRUE_COEFFICIENTS` plus uniform noise
#[derive(Debug, Clone)]
pub struct DataGenerator {
    rng: WyRand,
    noise_bound: f64,
}

impl DataGenerator {
    /// Create a new generator, seeded if `seed` is given, from entropy otherwise
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => WyRand::new_seed(seed),
            None => WyRand::new(),
        };

        Self::with_rng(rng)
    }

    /// Create a generator drawing from the given random source
    pub fn with_rng(rng: WyRand) -> Self {
        Self {
            rng,
            noise_bound: NOISE_BOUND,
        }
    }

    /// Create a generator from parameters
    pub fn from_params(params: &Params) -> Self {
        Self::new(params.seed).with_noise_bound(params.noise_bound)
    }

    /// Replace the noise bound, e.g. to generate (almost) noiseless data
    pub fn with_noise_bound(mut self, noise_bound: f64) -> Self {
        assert!(
            noise_bound.is_finite() && noise_bound >= 0.0,
            "noise bound must be finite and non-negative, got {}",
            noise_bound
        );
        self.noise_bound = noise_bound;
        self
    }

    /// The noise bound in use
    #[inline(always)]
    pub fn noise_bound(&self) -> f64 {
        self.noise_bound
    }

    /// Draw a fresh set of `n` observations.
    /// Every call advances the random source, so consecutive sets differ.
    pub fn generate(&mut self, n: usize) -> ObservationSet {
        assert!(n > 0, "cannot generate an empty observation set");

        let [c0, c1, c2, c3] = TRUE_COEFFICIENTS;
        let points: Vec<(f64, f64, f64, f64)> = (0..n)
            .map(|_| {
                let x1 = self.uniform(FEATURE_BOUND);
                let x2 = self.uniform(FEATURE_BOUND);
                let x3 = self.uniform(FEATURE_BOUND);
                let noise = self.uniform(self.noise_bound);
                let y = c0 + c1 * x1 + c2 * x2 + c3 * x3 + noise;

                (x1, x2, x3, y)
            })
            .collect();
        debug!("generated {} observations, noise bound: {}", n, self.noise_bound);

        ObservationSet::from_points(points)
    }

    /// Uniform draw from `[-bound, bound]`
    #[inline(always)]
    fn uniform(&mut self, bound: f64) -> f64 {
        (self.rng.generate::<f64>() * 2.0 - 1.0) * bound
    }
}

impl Default for DataGenerator {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Draw `n` observations from an unseeded generator
pub fn generate(n: usize) -> ObservationSet {
    DataGenerator::default().generate(n)
}
