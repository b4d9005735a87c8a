//! Forecast Consumer API
//!
//! Builder API for constructing forecasters.
//!
//! This crate provides:
//! - [`ForecasterBuilder`] validating training parameters up front
//! - Re-exports from SPI and core for convenience

// Re-export from core
pub use forecast_core::{
    forecaster, regression, synthetic, LinearForecaster, LinearRegression, SyntheticTrend,
};

// Re-export traits from SPI
pub use forecast_spi::{
    ForecastError, Forecaster, ModelState, Regressor, Result, TrainingConfig, TrainingSet,
    TrainingSource,
};

/// Builder for a [`LinearForecaster`] trained on a synthetic trend
///
/// # Example
///
/// ```rust
/// use forecast_api::ForecasterBuilder;
/// use forecast_spi::Forecaster;
///
/// let forecaster = ForecasterBuilder::new().seed(42).build().unwrap();
/// assert!(!forecaster.is_ready());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ForecasterBuilder {
    config: TrainingConfig,
}

impl ForecasterBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: TrainingConfig) -> Self {
        Self { config }
    }

    /// Number of synthetic observations per training run
    pub fn samples(mut self, n_samples: usize) -> Self {
        self.config.n_samples = n_samples;
        self
    }

    /// Underlying trend `slope * x + intercept`
    pub fn trend(mut self, slope: f64, intercept: f64) -> Self {
        self.config.slope = slope;
        self.config.intercept = intercept;
        self
    }

    pub fn noise_std(mut self, noise_std: f64) -> Self {
        self.config.noise_std = noise_std;
        self
    }

    /// Make training reproducible
    pub fn seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    pub fn maybe_seed(mut self, seed: Option<u64>) -> Self {
        self.config.seed = seed;
        self
    }

    pub fn config(&self) -> &TrainingConfig {
        &self.config
    }

    /// Validate the configuration and build an untrained forecaster
    pub fn build(self) -> Result<LinearForecaster> {
        validate(&self.config)?;
        Ok(LinearForecaster::with_config(self.config))
    }
}

fn validate(config: &TrainingConfig) -> Result<()> {
    if config.n_samples < 2 {
        return Err(ForecastError::InvalidParameter {
            name: "n_samples".to_string(),
            reason: "must be at least 2".to_string(),
        });
    }
    for (name, value) in [
        ("slope", config.slope),
        ("intercept", config.intercept),
        ("noise_std", config.noise_std),
    ] {
        if !value.is_finite() {
            return Err(ForecastError::InvalidParameter {
                name: name.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }
    if config.noise_std < 0.0 {
        return Err(ForecastError::InvalidParameter {
            name: "noise_std".to_string(),
            reason: "must be non-negative".to_string(),
        });
    }
    Ok(())
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::ForecasterBuilder;
    pub use forecast_core::{LinearForecaster, LinearRegression, SyntheticTrend};
    pub use forecast_spi::{
        ForecastError, Forecaster, ModelState, Regressor, Result, TrainingConfig,
        TrainingSet, TrainingSource,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_builder_uses_reference_trend() {
        let builder = ForecasterBuilder::new();
        assert_eq!(builder.config(), &TrainingConfig::default());
        assert!(builder.build().is_ok());
    }

    #[test]
    fn test_builder_setters() {
        let builder = ForecasterBuilder::new()
            .samples(50)
            .trend(1.5, -3.0)
            .noise_std(0.5)
            .seed(11);
        let config = builder.config();
        assert_eq!(config.n_samples, 50);
        assert_eq!(config.slope, 1.5);
        assert_eq!(config.intercept, -3.0);
        assert_eq!(config.noise_std, 0.5);
        assert_eq!(config.seed, Some(11));
    }

    #[test]
    fn test_rejects_too_few_samples() {
        let err = ForecasterBuilder::new().samples(1).build().unwrap_err();
        assert!(matches!(
            err,
            ForecastError::InvalidParameter { ref name, .. } if name == "n_samples"
        ));
    }

    #[test]
    fn test_rejects_negative_noise() {
        let err = ForecasterBuilder::new().noise_std(-1.0).build().unwrap_err();
        assert!(err.to_string().contains("noise_std"));
    }

    #[test]
    fn test_rejects_non_finite_trend() {
        assert!(ForecasterBuilder::new().trend(f64::NAN, 0.0).build().is_err());
        assert!(ForecasterBuilder::new()
            .trend(1.0, f64::INFINITY)
            .build()
            .is_err());
    }

    #[test]
    fn test_maybe_seed_clears_seed() {
        let builder = ForecasterBuilder::new().seed(5).maybe_seed(None);
        assert!(builder.config().seed.is_none());
    }

    #[test]
    fn test_noise_free_builder_is_exact() {
        let forecaster = ForecasterBuilder::new()
            .noise_std(0.0)
            .trend(2.0, 10.0)
            .build()
            .unwrap();
        let value = forecaster.predict_single(&[0.0; 5]).unwrap();
        assert!((value - 20.0).abs() < 1e-9);
    }
}
