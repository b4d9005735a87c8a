//! Forecast Core
//!
//! Core implementations for the forecasting engine: closed-form least
//! squares, the synthetic training source and the lazily trained
//! [`LinearForecaster`].

pub mod forecaster;
pub mod regression;
pub mod synthetic;

// Re-export SPI traits for implementations
pub use forecast_spi::{
    ForecastError, Forecaster, ModelState, Regressor, Result, TrainingConfig, TrainingSet,
    TrainingSource,
};

// Re-export main types
pub use forecaster::LinearForecaster;
pub use regression::LinearRegression;
pub use synthetic::SyntheticTrend;
