use crate::core::features::build_record;
use crate::core::model_handle::ModelHandle;
use crate::domain::model::{PassengerInput, PredictionResult};
use crate::utils::error::{PredictError, Result};
use crate::utils::validation::Validate;

/// Turns one form submission into one prediction.
///
/// Stateless apart from the shared model handle: nothing is cached between
/// calls and no call is retried.
#[derive(Debug, Clone)]
pub struct PredictionService {
    model: ModelHandle,
}

impl PredictionService {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }

    pub fn model(&self) -> &ModelHandle {
        &self.model
    }

    /// Validate the raw input, then predict.
    pub fn submit(&self, passenger: &PassengerInput) -> Result<PredictionResult> {
        passenger.validate()?;
        self.predict(passenger)
    }

    pub fn predict(&self, passenger: &PassengerInput) -> Result<PredictionResult> {
        // 模型不可用時不送出請求
        let predictor = self.model.predictor()?;

        let record = build_record(passenger);
        tracing::debug!("Prediction record: {:?}", record);

        let label = predictor
            .predict(&record)
            .map_err(PredictError::into_inference)?;
        let probabilities = predictor
            .predict_probability(&record)
            .map_err(PredictError::into_inference)?;

        let survived = match label {
            0 => false,
            1 => true,
            other => {
                return Err(PredictError::inference(format!(
                    "predictor returned label {}, expected 0 or 1",
                    other
                )))
            }
        };

        let probability = probabilities[1];
        if !(0.0..=1.0).contains(&probability) {
            return Err(PredictError::inference(format!(
                "predictor returned survival probability {}, expected a value in [0, 1]",
                probability
            )));
        }

        tracing::debug!(
            "Prediction: survived={}, probability={:.4}",
            survived,
            probability
        );

        Ok(PredictionResult {
            survived,
            probability,
        })
    }
}
