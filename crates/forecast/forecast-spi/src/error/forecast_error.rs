//! Forecast error types

use thiserror::Error;

/// Errors that can occur while training or evaluating a model
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ForecastError {
    /// Insufficient data points for the operation
    #[error("Insufficient data: need at least {required} points, got {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// Invalid parameter value
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// Model has not been trained yet
    #[error("Model must be trained before prediction")]
    NotTrained,

    /// Numerical computation error
    #[error("Numerical error: {0}")]
    NumericalError(String),

    /// The lock guarding model state was poisoned by a panicking writer
    #[error("Model state unavailable: {0}")]
    StatePoisoned(String),
}
