pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use adapters::logistic::LogisticModel;
pub use config::Settings;
pub use core::{model_handle::ModelHandle, service::PredictionService};
pub use domain::model::{PassengerInput, PredictionRecord, PredictionResult};
pub use domain::ports::Predictor;
pub use utils::error::{PredictError, Result};
