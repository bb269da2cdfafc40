pub mod batch;
pub mod features;
pub mod model_handle;
pub mod report;
pub mod runner;
pub mod service;

pub use crate::domain::model::{PassengerInput, PredictionRecord, PredictionResult};
pub use crate::domain::ports::{ConfigProvider, Predictor};
pub use crate::utils::error::Result;
