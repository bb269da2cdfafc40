use crate::config::toml_config::AppConfig;
use crate::config::Settings;
use crate::domain::model::{EmbarkPort, PassengerInput, Sex, TicketClass};
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "titanic-survival")]
#[command(about = "Predict whether a Titanic passenger would have survived")]
pub struct CliConfig {
    /// Ticket class (1, 2 or 3)
    #[arg(long, default_value = "1")]
    pub pclass: TicketClass,

    /// male or female
    #[arg(long, default_value = "male")]
    pub sex: Sex,

    /// Age in years, 0 to 90
    #[arg(long, default_value_t = 25.0)]
    pub age: f64,

    /// Siblings/spouses aboard, 0 to 10
    #[arg(long, default_value_t = 0)]
    pub sibsp: u8,

    /// Parents/children aboard, 0 to 10
    #[arg(long, default_value_t = 0)]
    pub parch: u8,

    /// Fare paid, 0 to 600
    #[arg(long, default_value_t = 32.0)]
    pub fare: f64,

    /// Port of embarkation (S, C or Q)
    #[arg(long, default_value = "S")]
    pub embarked: EmbarkPort,

    /// Model artifact path, overrides the config file
    #[arg(long)]
    pub model: Option<String>,

    /// Path to TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Predict every row of a CSV file instead of the flags above
    #[arg(long)]
    pub batch: Option<String>,

    /// Print the prediction as JSON
    #[arg(long)]
    pub json: bool,

    /// Skip the decorative animation
    #[arg(long)]
    pub no_animation: bool,

    /// Animation URL, overrides the config file
    #[arg(long)]
    pub animation_url: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    pub fn passenger(&self) -> PassengerInput {
        PassengerInput {
            ticket_class: self.pclass,
            sex: self.sex,
            age: self.age,
            siblings_spouses: self.sibsp,
            parents_children: self.parch,
            fare: self.fare,
            embark_port: self.embarked,
        }
    }

    /// 載入設定檔（若有）並套用命令列覆蓋
    pub fn settings(&self) -> Result<Settings> {
        let mut settings = match &self.config {
            Some(path) => {
                tracing::info!("📁 Loading configuration from: {}", path);
                let config = AppConfig::from_file(path)?;
                config.validate()?;
                Settings::from(config)
            }
            None => Settings::default(),
        };

        if let Some(model) = &self.model {
            settings.model_path = model.clone();
        }
        if let Some(url) = &self.animation_url {
            settings.animation_url = Some(url.clone());
        }
        if self.no_animation {
            settings.animation_url = None;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_ANIMATION_URL, DEFAULT_MODEL_PATH};

    #[test]
    fn test_defaults_match_form() {
        let config = CliConfig::parse_from(["titanic-survival"]);
        let passenger = config.passenger();
        assert_eq!(passenger.ticket_class, TicketClass::First);
        assert_eq!(passenger.sex, Sex::Male);
        assert_eq!(passenger.age, 25.0);
        assert_eq!(passenger.siblings_spouses, 0);
        assert_eq!(passenger.parents_children, 0);
        assert_eq!(passenger.fare, 32.0);
        assert_eq!(passenger.embark_port, EmbarkPort::Southampton);

        let settings = config.settings().unwrap();
        assert_eq!(settings.model_path, DEFAULT_MODEL_PATH);
        assert_eq!(settings.animation_url.as_deref(), Some(DEFAULT_ANIMATION_URL));
    }

    #[test]
    fn test_flags() {
        let config = CliConfig::parse_from([
            "titanic-survival",
            "--pclass",
            "3",
            "--sex",
            "female",
            "--age",
            "22",
            "--sibsp",
            "1",
            "--fare",
            "7.25",
            "--embarked",
            "Q",
            "--model",
            "custom.json",
            "--no-animation",
        ]);
        let passenger = config.passenger();
        assert_eq!(passenger.ticket_class, TicketClass::Third);
        assert_eq!(passenger.sex, Sex::Female);
        assert_eq!(passenger.embark_port, EmbarkPort::Queenstown);

        let settings = config.settings().unwrap();
        assert_eq!(settings.model_path, "custom.json");
        assert_eq!(settings.animation_url, None);
    }

    #[test]
    fn test_rejects_values_outside_enums() {
        assert!(CliConfig::try_parse_from(["titanic-survival", "--pclass", "4"]).is_err());
        assert!(CliConfig::try_parse_from(["titanic-survival", "--embarked", "X"]).is_err());
        assert!(CliConfig::try_parse_from(["titanic-survival", "--sibsp", "-1"]).is_err());
    }
}
