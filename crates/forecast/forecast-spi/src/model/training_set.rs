//! Paired feature/target observations

use serde::{Deserialize, Serialize};

/// Observations used to fit a regressor
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingSet {
    features: Vec<f64>,
    targets: Vec<f64>,
}

impl TrainingSet {
    pub fn new(features: Vec<f64>, targets: Vec<f64>) -> Self {
        Self { features, targets }
    }

    pub fn features(&self) -> &[f64] {
        &self.features
    }

    pub fn targets(&self) -> &[f64] {
        &self.targets
    }

    /// Number of observations (shorter side if lengths disagree)
    pub fn len(&self) -> usize {
        self.features.len().min(self.targets.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
