//! Supplier of training observations

use crate::model::TrainingSet;

/// Produces the observations a forecaster is trained on.
///
/// Sources may be stochastic; each call can yield a different set.
pub trait TrainingSource: Send {
    /// Generate a fresh training set
    fn generate(&mut self) -> TrainingSet;
}
