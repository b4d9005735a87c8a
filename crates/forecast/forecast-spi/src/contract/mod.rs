//! Contract module containing trait definitions for forecast operations

mod forecaster;
mod regressor;
mod training_source;

pub use forecaster::Forecaster;
pub use regressor::Regressor;
pub use training_source::TrainingSource;
