use crate::domain::model::PredictionResult;
use crate::utils::error::PredictError;

pub fn verdict(result: &PredictionResult) -> &'static str {
    if result.survived {
        "likely to survive"
    } else {
        "unlikely to survive"
    }
}

/// Message shown after a prediction, probability rounded to two decimals.
pub fn render_result(result: &PredictionResult) -> String {
    let icon = if result.survived { "✅" } else { "❌" };
    format!(
        "{} The passenger is {}\n\nSurvival Probability: {:.2}",
        icon,
        verdict(result),
        result.probability
    )
}

pub fn render_error(error: &PredictError) -> String {
    format!(
        "⚠️ {}\n💡 {}",
        error.user_friendly_message(),
        error.recovery_suggestion()
    )
}
