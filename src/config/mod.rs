#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_url, Validate};

pub const DEFAULT_TITLE: &str = "Titanic Survival Prediction";
pub const DEFAULT_MODEL_PATH: &str = "titanic_model.json";
pub const DEFAULT_ANIMATION_URL: &str =
    "https://assets7.lottiefiles.com/packages/lf20_xlkxtmul.json";

/// Resolved settings after merging the optional TOML file with CLI flags.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub title: String,
    pub model_path: String,
    pub animation_url: Option<String>,
    pub animation_timeout_seconds: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            model_path: DEFAULT_MODEL_PATH.to_string(),
            animation_url: Some(DEFAULT_ANIMATION_URL.to_string()),
            animation_timeout_seconds: 5,
        }
    }
}

impl From<toml_config::AppConfig> for Settings {
    fn from(config: toml_config::AppConfig) -> Self {
        let animation_url = config
            .animation_enabled()
            .then(|| config.animation_url().to_string());
        Self {
            animation_timeout_seconds: config.animation_timeout_seconds(),
            title: config.app.title,
            model_path: config.app.model_path,
            animation_url,
        }
    }
}

impl ConfigProvider for Settings {
    fn model_path(&self) -> &str {
        &self.model_path
    }

    fn animation_url(&self) -> Option<&str> {
        self.animation_url.as_deref()
    }

    fn animation_timeout_seconds(&self) -> u64 {
        self.animation_timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_path("model_path", &self.model_path)?;
        if let Some(url) = &self.animation_url {
            validate_url("animation_url", url)?;
        }
        Ok(())
    }
}
