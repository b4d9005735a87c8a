//! Synthetic training data parameters

use serde::{Deserialize, Serialize};

/// Parameters of the synthetic trend a forecaster is trained on.
///
/// Targets are generated as `slope * x + noise_std * N(0, 1) + intercept`
/// for `x` in `0..n_samples`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingConfig {
    /// Number of generated observations
    pub n_samples: usize,
    /// Slope of the underlying trend
    pub slope: f64,
    /// Intercept of the underlying trend
    pub intercept: f64,
    /// Standard deviation of the additive Gaussian noise
    pub noise_std: f64,
    /// Fixed RNG seed; `None` draws from entropy on every run
    pub seed: Option<u64>,
}

impl Default for TrainingConfig {
    fn default() -> Self {
        Self {
            n_samples: 100,
            slope: 2.0,
            intercept: 10.0,
            noise_std: 5.0,
            seed: None,
        }
    }
}
