//! Forecaster lifecycle and prediction contract

use crate::error::Result;
use crate::model::ModelState;

/// A trainable single-feature forecaster shared across request handlers.
///
/// Implementations start untrained and become trained either through an
/// explicit [`train`](Forecaster::train) or lazily on the first prediction.
/// They never return to the untrained state.
///
/// The model feature is the *length* of the supplied series, not its values.
pub trait Forecaster: Send + Sync {
    /// Whether a model has been fitted
    fn is_ready(&self) -> bool;

    /// Current lifecycle state
    fn state(&self) -> ModelState {
        if self.is_ready() {
            ModelState::Trained
        } else {
            ModelState::Untrained
        }
    }

    /// Fit the model on freshly generated training data, replacing any
    /// previous fit
    fn train(&self) -> Result<()>;

    /// Evaluate the model at `data.len()`, training first if needed
    fn predict_single(&self, data: &[f64]) -> Result<f64>;

    /// Evaluate the model at `data.len() + i` for `i in 0..steps`, training
    /// at most once first if needed
    fn forecast_multi(&self, data: &[f64], steps: usize) -> Result<Vec<f64>>;
}
