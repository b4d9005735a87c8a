//! Synthetic linear trend with Gaussian noise
//!
//! Produces the sample data the forecaster is trained on. Caller-supplied
//! series are never used for fitting.

use forecast_spi::{TrainingConfig, TrainingSet, TrainingSource};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;

/// Training source drawing `slope * x + noise_std * N(0, 1) + intercept`
/// for `x` in `0..n_samples`
#[derive(Debug, Clone)]
pub struct SyntheticTrend {
    config: TrainingConfig,
    rng: StdRng,
}

impl Default for SyntheticTrend {
    fn default() -> Self {
        Self::new(TrainingConfig::default())
    }
}

impl SyntheticTrend {
    /// Create a source; seeded when `config.seed` is set, otherwise from entropy
    pub fn new(config: TrainingConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { config, rng }
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }
}

impl TrainingSource for SyntheticTrend {
    fn generate(&mut self) -> TrainingSet {
        let TrainingConfig {
            n_samples,
            slope,
            intercept,
            noise_std,
            ..
        } = self.config;

        let features: Vec<f64> = (0..n_samples).map(|i| i as f64).collect();
        let targets = features
            .iter()
            .map(|&x| {
                let noise: f64 = self.rng.sample(StandardNormal);
                slope * x + noise * noise_std + intercept
            })
            .collect();

        TrainingSet::new(features, targets)
    }
}
