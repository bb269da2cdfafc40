use thiserror::Error;

#[derive(Error, Debug)]
pub enum PredictError {
    #[error("Failed to load model from '{path}': {reason}")]
    ModelLoadFailure { path: String, reason: String },

    #[error("Model is not available")]
    ModelUnavailable,

    #[error("Inference failed: {message}")]
    InferenceFailure { message: String },

    #[error("Invalid input for '{field}': {value} ({reason})")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Model,
    Inference,
    Input,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PredictError {
    pub fn inference(message: impl Into<String>) -> Self {
        Self::InferenceFailure {
            message: message.into(),
        }
    }

    pub fn invalid_input(field: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    /// 把 predictor 回報的任何錯誤收斂成 InferenceFailure，保留原始訊息
    pub fn into_inference(self) -> Self {
        match self {
            Self::InferenceFailure { .. } => self,
            other => Self::InferenceFailure {
                message: other.to_string(),
            },
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ModelLoadFailure { .. } | Self::ModelUnavailable => ErrorCategory::Model,
            Self::InferenceFailure { .. } => ErrorCategory::Inference,
            Self::InvalidInput { .. } | Self::CsvError(_) => ErrorCategory::Input,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InferenceFailure { .. } | Self::InvalidInput { .. } | Self::CsvError(_) => {
                ErrorSeverity::Medium
            }
            Self::ModelLoadFailure { .. } | Self::ModelUnavailable | Self::ConfigError { .. } => {
                ErrorSeverity::High
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::ModelLoadFailure { path, .. } => {
                format!("Error loading model from '{}'. Predictions are disabled.", path)
            }
            Self::ModelUnavailable => {
                "The prediction model is not loaded, so no prediction can be made.".to_string()
            }
            Self::InferenceFailure { message } => format!("Prediction failed: {}", message),
            Self::InvalidInput { field, reason, .. } => {
                format!("The value for '{}' is not accepted: {}", field, reason)
            }
            Self::ConfigError { message } => format!("Configuration problem: {}", message),
            Self::CsvError(e) => format!("Could not read passenger rows: {}", e),
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::ModelLoadFailure { .. } => {
                "Check that the model file exists and was exported in the expected JSON format"
            }
            Self::ModelUnavailable => "Fix the model load error above and run again",
            Self::InferenceFailure { .. } => {
                "Check that the model was trained on the same ten columns, then change the inputs and retry"
            }
            Self::InvalidInput { .. } => "Adjust the value to lie within the allowed range",
            Self::ConfigError { .. } => "Check the configuration file and command-line flags",
            Self::CsvError(_) => {
                "Make sure the CSV has the header Pclass,Sex,Age,SibSp,Parch,Fare,Embarked"
            }
            Self::IoError(_) => "Check file permissions and paths",
            Self::SerializationError(_) => "Check that the JSON document is well formed",
        }
    }
}

pub type Result<T> = std::result::Result<T, PredictError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_inference_keeps_original_text() {
        let err = PredictError::ConfigError {
            message: "feature shape mismatch".to_string(),
        }
        .into_inference();

        match err {
            PredictError::InferenceFailure { message } => {
                assert!(message.contains("feature shape mismatch"))
            }
            other => panic!("unexpected error: {:?}", other),
        }

        let already = PredictError::inference("boom").into_inference();
        assert_eq!(already.to_string(), "Inference failed: boom");
    }

    #[test]
    fn test_severity_and_category() {
        assert_eq!(PredictError::ModelUnavailable.category(), ErrorCategory::Model);
        assert_eq!(PredictError::ModelUnavailable.severity(), ErrorSeverity::High);
        assert_eq!(
            PredictError::inference("x").severity(),
            ErrorSeverity::Medium
        );
        assert!(ErrorSeverity::Critical > ErrorSeverity::Low);
    }
}
