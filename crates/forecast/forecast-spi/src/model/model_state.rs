//! Forecaster lifecycle state

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle of a forecaster's model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelState {
    /// No fit has happened yet
    Untrained,
    /// Fitted at least once; ready to predict
    Trained,
}

impl ModelState {
    pub fn is_ready(self) -> bool {
        matches!(self, ModelState::Trained)
    }
}

impl fmt::Display for ModelState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelState::Untrained => write!(f, "untrained"),
            ModelState::Trained => write!(f, "trained"),
        }
    }
}
