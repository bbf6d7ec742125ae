use crate::{DEFAULT_NUM_OBSERVATIONS, NOISE_BOUND};

/// The parameters of the data generator
#[derive(Debug, Clone)]
pub struct Params {
    /// Number of observations per generated set
    pub num_observations: usize,
    /// Optional seed for Rng
    pub seed: Option<u64>,
    /// Noise is drawn from `[-noise_bound, noise_bound]`
    pub noise_bound: f64,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            num_observations: DEFAULT_NUM_OBSERVATIONS,
            seed: None,
            noise_bound: NOISE_BOUND,
        }
    }
}
