use crate::domain::model::{FeatureValue, PredictionRecord};
use crate::domain::ports::Predictor;
use crate::utils::error::{PredictError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

fn default_threshold() -> f64 {
    0.5
}

fn default_scale() -> f64 {
    1.0
}

/// Standardized numeric column: contributes `weight * (x - mean) / scale`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NumericTerm {
    pub column: String,
    #[serde(default)]
    pub mean: f64,
    #[serde(default = "default_scale")]
    pub scale: f64,
    pub weight: f64,
}

/// One-hot encoded column: contributes the weight of the observed category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoricalTerm {
    pub column: String,
    pub weights: HashMap<String, f64>,
}

/// Logistic-regression scorer exported by the training pipeline as JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub name: String,
    pub intercept: f64,
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    #[serde(default)]
    pub numeric: Vec<NumericTerm>,
    #[serde(default)]
    pub categorical: Vec<CategoricalTerm>,
}

impl LogisticModel {
    /// 從 JSON 檔案載入模型
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let display = path.as_ref().display().to_string();
        let content =
            std::fs::read_to_string(&path).map_err(|e| PredictError::ModelLoadFailure {
                path: display.clone(),
                reason: e.to_string(),
            })?;
        Self::parse(&content, &display)
    }

    pub fn from_json_str(content: &str) -> Result<Self> {
        Self::parse(content, "<inline>")
    }

    fn parse(content: &str, origin: &str) -> Result<Self> {
        let model: Self =
            serde_json::from_str(content).map_err(|e| PredictError::ModelLoadFailure {
                path: origin.to_string(),
                reason: format!("corrupt model document: {}", e),
            })?;

        model
            .check_compatible()
            .map_err(|reason| PredictError::ModelLoadFailure {
                path: origin.to_string(),
                reason,
            })?;

        tracing::debug!(
            "Model '{}' has {} numeric and {} categorical terms",
            model.name,
            model.numeric.len(),
            model.categorical.len()
        );
        Ok(model)
    }

    /// Reject artifacts that reference columns the record does not carry.
    fn check_compatible(&self) -> std::result::Result<(), String> {
        if !self.intercept.is_finite() {
            return Err("intercept must be a finite number".to_string());
        }
        if !(self.threshold > 0.0 && self.threshold < 1.0) {
            return Err(format!(
                "threshold must lie strictly between 0 and 1, got {}",
                self.threshold
            ));
        }

        let columns = self
            .numeric
            .iter()
            .map(|t| t.column.as_str())
            .chain(self.categorical.iter().map(|t| t.column.as_str()));
        for column in columns {
            if !PredictionRecord::COLUMNS.contains(&column) {
                return Err(format!(
                    "model expects column '{}', which is not one of: {}",
                    column,
                    PredictionRecord::COLUMNS.join(", ")
                ));
            }
        }

        for term in &self.numeric {
            if !(term.scale.is_finite() && term.scale != 0.0) {
                return Err(format!("column '{}' has an invalid scale", term.column));
            }
            if !(term.mean.is_finite() && term.weight.is_finite()) {
                return Err(format!("column '{}' has a non-finite coefficient", term.column));
            }
        }

        Ok(())
    }

    fn score(&self, record: &PredictionRecord) -> Result<f64> {
        let mut z = self.intercept;

        for term in &self.numeric {
            match record.value(&term.column) {
                Some(FeatureValue::Number(x)) => z += term.weight * (x - term.mean) / term.scale,
                Some(FeatureValue::Category(value)) => {
                    return Err(PredictError::inference(format!(
                        "column '{}' holds category '{}' but the model expects a number",
                        term.column, value
                    )))
                }
                None => {
                    return Err(PredictError::inference(format!(
                        "column '{}' is missing from the record",
                        term.column
                    )))
                }
            }
        }

        for term in &self.categorical {
            let key = match record.value(&term.column) {
                Some(FeatureValue::Category(value)) => value.to_string(),
                // 例如 Pclass 被當成類別欄位：3.0 -> "3"
                Some(FeatureValue::Number(x)) => x.to_string(),
                None => {
                    return Err(PredictError::inference(format!(
                        "column '{}' is missing from the record",
                        term.column
                    )))
                }
            };
            let weight = term.weights.get(&key).ok_or_else(|| {
                PredictError::inference(format!(
                    "unseen category '{}' in column '{}'",
                    key, term.column
                ))
            })?;
            z += weight;
        }

        if !z.is_finite() {
            return Err(PredictError::inference("score is not a finite number"));
        }
        Ok(z)
    }

    fn survival_probability(&self, record: &PredictionRecord) -> Result<f64> {
        let z = self.score(record)?;
        Ok(1.0 / (1.0 + (-z).exp()))
    }
}

impl Predictor for LogisticModel {
    fn predict(&self, record: &PredictionRecord) -> Result<u8> {
        let p = self.survival_probability(record)?;
        Ok(u8::from(p >= self.threshold))
    }

    fn predict_probability(&self, record: &PredictionRecord) -> Result<[f64; 2]> {
        let p = self.survival_probability(record)?;
        Ok([1.0 - p, p])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{EmbarkPort, Sex, Title};

    fn record(sex: Sex, embarked: EmbarkPort) -> PredictionRecord {
        PredictionRecord {
            pclass: 3,
            sex,
            age: 22.0,
            sib_sp: 1,
            parch: 0,
            fare: 7.25,
            embarked,
            title: Title::Miss,
            family_size: 2,
            is_alone: 0,
        }
    }

    #[test]
    fn test_categorical_probability() {
        // ln(4) 讓女性的存活機率剛好是 0.8
        let model = LogisticModel::from_json_str(
            r#"{
                "name": "sex-only",
                "intercept": 0.0,
                "categorical": [
                    {"column": "Sex", "weights": {"female": 1.3862943611198906, "male": -1.3862943611198906}}
                ]
            }"#,
        )
        .unwrap();

        let female = model
            .predict_probability(&record(Sex::Female, EmbarkPort::Southampton))
            .unwrap();
        assert!((female[1] - 0.8).abs() < 1e-9);
        assert!((female[0] + female[1] - 1.0).abs() < 1e-12);
        assert_eq!(model.predict(&record(Sex::Female, EmbarkPort::Southampton)).unwrap(), 1);

        let male = model
            .predict_probability(&record(Sex::Male, EmbarkPort::Southampton))
            .unwrap();
        assert!((male[1] - 0.2).abs() < 1e-9);
        assert_eq!(model.predict(&record(Sex::Male, EmbarkPort::Southampton)).unwrap(), 0);
    }

    #[test]
    fn test_numeric_and_pclass_as_category() {
        let model = LogisticModel::from_json_str(
            r#"{
                "name": "mixed",
                "intercept": 0.5,
                "numeric": [{"column": "Age", "mean": 22.0, "scale": 10.0, "weight": 2.0}],
                "categorical": [{"column": "Pclass", "weights": {"1": 1.0, "2": 0.0, "3": -0.5}}]
            }"#,
        )
        .unwrap();

        // z = 0.5 + 0 - 0.5 = 0
        let p = model
            .predict_probability(&record(Sex::Male, EmbarkPort::Cherbourg))
            .unwrap();
        assert!((p[1] - 0.5).abs() < 1e-12);
        // 0.5 >= threshold 0.5
        assert_eq!(model.predict(&record(Sex::Male, EmbarkPort::Cherbourg)).unwrap(), 1);
    }

    #[test]
    fn test_unseen_category_is_inference_failure() {
        let model = LogisticModel::from_json_str(
            r#"{
                "name": "ports",
                "intercept": 0.0,
                "categorical": [{"column": "Embarked", "weights": {"S": 0.1, "C": 0.2}}]
            }"#,
        )
        .unwrap();

        let err = model
            .predict(&record(Sex::Female, EmbarkPort::Queenstown))
            .unwrap_err();
        match err {
            PredictError::InferenceFailure { message } => {
                assert!(message.contains("unseen category 'Q'"))
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_numeric_term_over_category_column_fails() {
        let model = LogisticModel::from_json_str(
            r#"{"name": "bad", "intercept": 0.0, "numeric": [{"column": "Sex", "weight": 1.0}]}"#,
        )
        .unwrap();
        assert!(matches!(
            model.predict(&record(Sex::Male, EmbarkPort::Southampton)),
            Err(PredictError::InferenceFailure { .. })
        ));
    }

    #[test]
    fn test_incompatible_artifacts_fail_to_load() {
        let unknown_column = LogisticModel::from_json_str(
            r#"{"name": "m", "intercept": 0.0, "numeric": [{"column": "Cabin", "weight": 1.0}]}"#,
        );
        assert!(matches!(
            unknown_column,
            Err(PredictError::ModelLoadFailure { .. })
        ));

        let zero_scale = LogisticModel::from_json_str(
            r#"{"name": "m", "intercept": 0.0, "numeric": [{"column": "Age", "scale": 0.0, "weight": 1.0}]}"#,
        );
        assert!(zero_scale.is_err());

        let bad_threshold =
            LogisticModel::from_json_str(r#"{"name": "m", "intercept": 0.0, "threshold": 1.5}"#);
        assert!(bad_threshold.is_err());

        let corrupt = LogisticModel::from_json_str("not json at all");
        assert!(matches!(corrupt, Err(PredictError::ModelLoadFailure { .. })));
    }
}
