//! Scalar regression trait

use crate::error::Result;

/// A model mapping a scalar feature to a scalar target
pub trait Regressor: Send + Sync {
    /// Fit the model to paired feature/target observations
    fn fit(&mut self, features: &[f64], targets: &[f64]) -> Result<()>;

    /// Evaluate the fitted model at a feature value
    fn predict_at(&self, feature: f64) -> Result<f64>;

    /// Check if the model has been fitted
    fn is_fitted(&self) -> bool;
}
