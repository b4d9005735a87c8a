//! Linear forecaster over series length
//!
//! Owns a fitted [`LinearRegression`] and its trained/untrained state. The
//! fitted line and the readiness flag live in one `RwLock<Option<_>>`, so a
//! reader never sees coefficients without the flag or the reverse.

use crate::regression::LinearRegression;
use crate::synthetic::SyntheticTrend;
use forecast_spi::{
    ForecastError, Forecaster, Regressor, Result, TrainingConfig, TrainingSource,
};
use std::sync::{Mutex, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Forecaster fitting `y = a * x + b` where `x` is the length of the input
/// series
///
/// # Example
///
/// ```rust
/// use forecast_core::LinearForecaster;
/// use forecast_spi::Forecaster;
///
/// let forecaster = LinearForecaster::new();
/// assert!(!forecaster.is_ready());
///
/// let next = forecaster.predict_single(&[1.0, 2.0, 3.0]).unwrap();
/// assert!(forecaster.is_ready());
///
/// let horizon = forecaster.forecast_multi(&[1.0, 2.0, 3.0], 7).unwrap();
/// assert_eq!(horizon.len(), 7);
/// assert!((horizon[0] - next).abs() < 1e-9);
/// ```
#[derive(Debug)]
pub struct LinearForecaster<S = SyntheticTrend> {
    source: Mutex<S>,
    model: RwLock<Option<LinearRegression>>,
}

impl Default for LinearForecaster<SyntheticTrend> {
    fn default() -> Self {
        Self::new()
    }
}

impl LinearForecaster<SyntheticTrend> {
    /// Untrained forecaster over the default synthetic trend
    pub fn new() -> Self {
        Self::with_source(SyntheticTrend::default())
    }

    pub fn with_config(config: TrainingConfig) -> Self {
        Self::with_source(SyntheticTrend::new(config))
    }
}

impl<S: TrainingSource> LinearForecaster<S> {
    /// Untrained forecaster drawing its training data from `source`
    pub fn with_source(source: S) -> Self {
        Self {
            source: Mutex::new(source),
            model: RwLock::new(None),
        }
    }

    /// Snapshot of the fitted model, if any
    pub fn model(&self) -> Result<Option<LinearRegression>> {
        Ok(*self.read_model()?)
    }

    /// `(slope, intercept)` of the fitted model, if any
    pub fn coefficients(&self) -> Result<Option<(f64, f64)>> {
        Ok(self.model()?.map(|m| (m.slope(), m.intercept())))
    }

    fn read_model(&self) -> Result<RwLockReadGuard<'_, Option<LinearRegression>>> {
        self.model
            .read()
            .map_err(|e| ForecastError::StatePoisoned(e.to_string()))
    }

    fn write_model(&self) -> Result<RwLockWriteGuard<'_, Option<LinearRegression>>> {
        self.model
            .write()
            .map_err(|e| ForecastError::StatePoisoned(e.to_string()))
    }

    fn fit_fresh(&self) -> Result<LinearRegression> {
        let set = self
            .source
            .lock()
            .map_err(|e| ForecastError::StatePoisoned(e.to_string()))?
            .generate();

        let mut model = LinearRegression::new();
        model.fit(set.features(), set.targets())?;

        tracing::info!(
            slope = model.slope(),
            intercept = model.intercept(),
            r_squared = model.r_squared(),
            samples = model.n_observations(),
            "Model trained successfully"
        );
        Ok(model)
    }

    /// Return the fitted model, training exactly once if none exists yet.
    ///
    /// The emptiness check is repeated under the write lock so concurrent
    /// first callers fit a single model.
    fn ensure_trained(&self) -> Result<LinearRegression> {
        if let Some(model) = *self.read_model()? {
            return Ok(model);
        }

        let mut slot = self.write_model()?;
        if let Some(model) = *slot {
            return Ok(model);
        }

        tracing::debug!("model not trained yet, training on first use");
        let model = self.fit_fresh()?;
        *slot = Some(model);
        Ok(model)
    }
}

impl<S: TrainingSource> Forecaster for LinearForecaster<S> {
    /// A poisoned state lock reports not ready.
    fn is_ready(&self) -> bool {
        self.read_model().map(|m| m.is_some()).unwrap_or(false)
    }

    fn train(&self) -> Result<()> {
        let model = self.fit_fresh()?;
        *self.write_model()? = Some(model);
        Ok(())
    }

    fn predict_single(&self, data: &[f64]) -> Result<f64> {
        let model = self.ensure_trained()?;
        model.predict_at(data.len() as f64)
    }

    fn forecast_multi(&self, data: &[f64], steps: usize) -> Result<Vec<f64>> {
        let model = self.ensure_trained()?;
        (0..steps)
            .map(|i| model.predict_at((data.len() + i) as f64))
            .collect()
    }
}
