use crate::domain::ports::Predictor;
use crate::utils::error::{PredictError, Result};
use std::fmt;
use std::sync::Arc;

/// Shared, read-only handle to the loaded predictor.
///
/// Built once at start-up and cloned into every request. A failed load is
/// kept inside the handle instead of aborting the process, so later
/// requests short-circuit with [`PredictError::ModelUnavailable`].
#[derive(Clone)]
pub struct ModelHandle {
    predictor: Option<Arc<dyn Predictor>>,
    load_error: Option<String>,
}

impl ModelHandle {
    pub fn new(predictor: Arc<dyn Predictor>) -> Self {
        Self {
            predictor: Some(predictor),
            load_error: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            predictor: None,
            load_error: Some(reason.into()),
        }
    }

    /// 執行 loader 一次；失敗時記錄錯誤並回傳空的 handle
    pub fn load_with<P, F>(path: &str, loader: F) -> Self
    where
        P: Predictor + 'static,
        F: FnOnce(&str) -> Result<P>,
    {
        tracing::info!("📦 Loading model from: {}", path);
        match loader(path) {
            Ok(predictor) => {
                tracing::info!("✅ Model loaded");
                Self::new(Arc::new(predictor))
            }
            Err(e) => {
                let err = match e {
                    PredictError::ModelLoadFailure { .. } => e,
                    other => PredictError::ModelLoadFailure {
                        path: path.to_string(),
                        reason: other.to_string(),
                    },
                };
                tracing::error!("❌ {}", err);
                tracing::error!("💡 Suggestion: {}", err.recovery_suggestion());
                Self::unavailable(err.to_string())
            }
        }
    }

    pub fn is_available(&self) -> bool {
        self.predictor.is_some()
    }

    pub fn load_error(&self) -> Option<&str> {
        self.load_error.as_deref()
    }

    pub fn predictor(&self) -> Result<&dyn Predictor> {
        self.predictor
            .as_deref()
            .ok_or(PredictError::ModelUnavailable)
    }
}

impl fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelHandle")
            .field("available", &self.is_available())
            .field("load_error", &self.load_error)
            .finish()
    }
}
