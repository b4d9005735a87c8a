//! Model module containing data structures

mod model_state;
mod training_config;
mod training_set;

pub use model_state::ModelState;
pub use training_config::TrainingConfig;
pub use training_set::TrainingSet;
