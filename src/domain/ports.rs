use crate::domain::model::PredictionRecord;
use crate::utils::error::Result;

/// Capability surface of a trained classifier over the ten-column row.
///
/// Implementations must be safe to share between requests; the loaded
/// model is never mutated after construction.
pub trait Predictor: Send + Sync {
    /// Class label, 1 for survived and 0 otherwise.
    fn predict(&self, record: &PredictionRecord) -> Result<u8>;

    /// `[P(not survived), P(survived)]`.
    fn predict_probability(&self, record: &PredictionRecord) -> Result<[f64; 2]>;
}

pub trait ConfigProvider: Send + Sync {
    fn model_path(&self) -> &str;
    fn animation_url(&self) -> Option<&str>;
    fn animation_timeout_seconds(&self) -> u64;
}
