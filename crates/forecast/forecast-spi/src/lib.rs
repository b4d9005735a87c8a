//! Forecast Service Provider Interface
//!
//! Defines the contracts, model types and error type shared by the
//! forecasting engine and the service layer that exposes it.
//!
//! - [`Forecaster`]: lifecycle and prediction operations of a trainable model
//! - [`Regressor`]: a scalar-to-scalar model fitted by least squares
//! - [`TrainingSource`]: supplier of training data
//! - [`ForecastError`]: standardized error type for all operations

pub mod contract;
pub mod error;
pub mod model;

// Re-export all public items at crate root for convenience
pub use contract::{Forecaster, Regressor, TrainingSource};
pub use error::{ForecastError, Result};
pub use model::{ModelState, TrainingConfig, TrainingSet};
