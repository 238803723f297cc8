//! The per-request subject of a prediction.

use serde::{Deserialize, Serialize};

use super::levels::{AlcoholLevel, Gender, Severity, SmokingLevel};

/// A diagnosed condition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub name: String,
    pub severity: Severity,
}

impl Disease {
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            severity,
        }
    }
}

/// Demographic, anthropometric and lifestyle attributes of one person.
///
/// Profiles are created per request and never shared. Field domains are
/// checked by [`UserProfile::validate`], not by the scoring engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// ISO 3166-1 alpha-3 country code.
    pub country: String,
    pub gender: Gender,
    #[serde(alias = "height")]
    pub height_cm: f64,
    #[serde(alias = "weight")]
    pub weight_kg: f64,
    pub age: u32,
    #[serde(default = "default_smoking")]
    pub smoking: SmokingLevel,
    #[serde(default = "default_alcohol", alias = "alcoholConsumption")]
    pub alcohol: AlcoholLevel,
    #[serde(default)]
    pub diseases: Vec<Disease>,
}

impl UserProfile {
    /// Creates a profile with no lifestyle risks and no diseases.
    pub fn new(
        country: impl Into<String>,
        gender: Gender,
        height_cm: f64,
        weight_kg: f64,
        age: u32,
    ) -> Self {
        Self {
            country: country.into(),
            gender,
            height_cm,
            weight_kg,
            age,
            smoking: SmokingLevel::Never,
            alcohol: AlcoholLevel::None,
            diseases: Vec::new(),
        }
    }

    pub fn with_smoking(mut self, smoking: SmokingLevel) -> Self {
        self.smoking = smoking;
        self
    }

    pub fn with_alcohol(mut self, alcohol: AlcoholLevel) -> Self {
        self.alcohol = alcohol;
        self
    }

    pub fn with_disease(mut self, name: impl Into<String>, severity: Severity) -> Self {
        self.diseases.push(Disease::new(name, severity));
        self
    }

    /// Age as a float, for arithmetic against predicted years.
    pub fn age_years(&self) -> f64 {
        f64::from(self.age)
    }
}

fn default_smoking() -> SmokingLevel {
    SmokingLevel::Never
}

fn default_alcohol() -> AlcoholLevel {
    AlcoholLevel::None
}
