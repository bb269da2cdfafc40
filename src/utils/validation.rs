use crate::utils::error::{PredictError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(PredictError::invalid_input(field_name, url_str, "URL cannot be empty"));
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(PredictError::invalid_input(
                field_name,
                url_str,
                format!("Unsupported URL scheme: {}", scheme),
            )),
        },
        Err(e) => Err(PredictError::invalid_input(
            field_name,
            url_str,
            format!("Invalid URL format: {}", e),
        )),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(PredictError::invalid_input(field_name, path, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(PredictError::invalid_input(
            field_name,
            path,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    // NaN 不滿足任何比較，需要另外擋下
    if !(value >= min && value <= max) {
        return Err(PredictError::invalid_input(
            field_name,
            value,
            format!("Value must be between {} and {}", min, max),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("animation.url", "https://example.com/a.json").is_ok());
        assert!(validate_url("animation.url", "http://example.com").is_ok());
        assert!(validate_url("animation.url", "").is_err());
        assert!(validate_url("animation.url", "invalid-url").is_err());
        assert!(validate_url("animation.url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_range() {
        assert!(validate_range("Age", 0.0, 0.0, 90.0).is_ok());
        assert!(validate_range("Age", 90.0, 0.0, 90.0).is_ok());
        assert!(validate_range("Age", 90.5, 0.0, 90.0).is_err());
        assert!(validate_range("Age", f64::NAN, 0.0, 90.0).is_err());
        assert!(validate_range("SibSp", 11u8, 0, 10).is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("app.model_path", "titanic_model.json").is_ok());
        assert!(validate_path("app.model_path", "  ").is_err());
        assert!(validate_path("app.model_path", "a\0b").is_err());
    }
}
