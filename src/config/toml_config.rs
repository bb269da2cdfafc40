use crate::config::{DEFAULT_ANIMATION_URL, DEFAULT_MODEL_PATH, DEFAULT_TITLE};
use crate::utils::error::{PredictError, Result};
use crate::utils::validation::{validate_path, validate_url, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub app: AppSection,
    pub animation: Option<AnimationSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppSection {
    #[serde(default = "default_title")]
    pub title: String,
    #[serde(default = "default_model_path")]
    pub model_path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimationSection {
    #[serde(default = "default_true")]
    pub enabled: bool,
    pub url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

fn default_title() -> String {
    DEFAULT_TITLE.to_string()
}

fn default_model_path() -> String {
    DEFAULT_MODEL_PATH.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for AppSection {
    fn default() -> Self {
        Self {
            title: default_title(),
            model_path: default_model_path(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| PredictError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${MODEL_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PredictError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn animation_enabled(&self) -> bool {
        self.animation.as_ref().map(|a| a.enabled).unwrap_or(true)
    }

    pub fn animation_url(&self) -> &str {
        self.animation
            .as_ref()
            .and_then(|a| a.url.as_deref())
            .unwrap_or(DEFAULT_ANIMATION_URL)
    }

    pub fn animation_timeout_seconds(&self) -> u64 {
        self.animation
            .as_ref()
            .and_then(|a| a.timeout_seconds)
            .unwrap_or(5)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        validate_path("app.model_path", &self.app.model_path)?;

        if self.animation_enabled() {
            validate_url("animation.url", self.animation_url())?;
            if self.animation_timeout_seconds() == 0 {
                return Err(PredictError::invalid_input(
                    "animation.timeout_seconds",
                    0,
                    "Value must be at least 1",
                ));
            }
        }

        Ok(())
    }
}
