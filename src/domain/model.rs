use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum TicketClass {
    First,
    Second,
    Third,
}

impl TicketClass {
    pub fn as_u8(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
        }
    }
}

impl TryFrom<u8> for TicketClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            other => Err(format!("ticket class must be 1, 2 or 3, got {}", other)),
        }
    }
}

impl From<TicketClass> for u8 {
    fn from(value: TicketClass) -> Self {
        value.as_u8()
    }
}

impl FromStr for TicketClass {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let n: u8 = s
            .trim()
            .parse()
            .map_err(|_| format!("ticket class must be 1, 2 or 3, got '{}'", s))?;
        Self::try_from(n)
    }
}

impl fmt::Display for TicketClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }
}

impl FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "male" => Ok(Self::Male),
            "female" => Ok(Self::Female),
            _ => Err(format!("sex must be 'male' or 'female', got '{}'", s)),
        }
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Port of embarkation, encoded by its initial as in the passenger manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmbarkPort {
    #[serde(rename = "S")]
    Southampton,
    #[serde(rename = "C")]
    Cherbourg,
    #[serde(rename = "Q")]
    Queenstown,
}

impl EmbarkPort {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Southampton => "S",
            Self::Cherbourg => "C",
            Self::Queenstown => "Q",
        }
    }
}

impl FromStr for EmbarkPort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "S" => Ok(Self::Southampton),
            "C" => Ok(Self::Cherbourg),
            "Q" => Ok(Self::Queenstown),
            _ => Err(format!("port of embarkation must be S, C or Q, got '{}'", s)),
        }
    }
}

impl fmt::Display for EmbarkPort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw form values for one passenger. Field names follow the manifest
/// headers so CSV rows deserialize directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PassengerInput {
    #[serde(rename = "Pclass")]
    pub ticket_class: TicketClass,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "SibSp")]
    pub siblings_spouses: u8,
    #[serde(rename = "Parch")]
    pub parents_children: u8,
    #[serde(rename = "Fare")]
    pub fare: f64,
    #[serde(rename = "Embarked")]
    pub embark_port: EmbarkPort,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Title {
    Mr,
    Miss,
}

impl Title {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Mr => "Mr",
            Self::Miss => "Miss",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedFeatures {
    pub family_size: u32,
    pub is_alone: u8,
    pub title: Title,
}

/// A single cell handed to the predictor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FeatureValue {
    Number(f64),
    Category(&'static str),
}

/// The ten-column row the trained model was fitted on. Column names and
/// order are fixed by [`PredictionRecord::COLUMNS`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionRecord {
    #[serde(rename = "Pclass")]
    pub pclass: u8,
    #[serde(rename = "Sex")]
    pub sex: Sex,
    #[serde(rename = "Age")]
    pub age: f64,
    #[serde(rename = "SibSp")]
    pub sib_sp: u8,
    #[serde(rename = "Parch")]
    pub parch: u8,
    #[serde(rename = "Fare")]
    pub fare: f64,
    #[serde(rename = "Embarked")]
    pub embarked: EmbarkPort,
    pub title: Title,
    #[serde(rename = "FamilySize")]
    pub family_size: u32,
    #[serde(rename = "IsAlone")]
    pub is_alone: u8,
}

impl PredictionRecord {
    pub const COLUMNS: [&'static str; 10] = [
        "Pclass",
        "Sex",
        "Age",
        "SibSp",
        "Parch",
        "Fare",
        "Embarked",
        "title",
        "FamilySize",
        "IsAlone",
    ];

    pub fn value(&self, column: &str) -> Option<FeatureValue> {
        let value = match column {
            "Pclass" => FeatureValue::Number(f64::from(self.pclass)),
            "Sex" => FeatureValue::Category(self.sex.as_str()),
            "Age" => FeatureValue::Number(self.age),
            "SibSp" => FeatureValue::Number(f64::from(self.sib_sp)),
            "Parch" => FeatureValue::Number(f64::from(self.parch)),
            "Fare" => FeatureValue::Number(self.fare),
            "Embarked" => FeatureValue::Category(self.embarked.as_str()),
            "title" => FeatureValue::Category(self.title.as_str()),
            "FamilySize" => FeatureValue::Number(f64::from(self.family_size)),
            "IsAlone" => FeatureValue::Number(f64::from(self.is_alone)),
            _ => return None,
        };
        Some(value)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PredictionResult {
    pub survived: bool,
    /// Probability of the survived class only.
    pub probability: f64,
}
