//! Multiplicative adjustment tables.
//!
//! A multiplier of 1.0 is neutral. Risk multipliers sit in (0, 1]; country
//! factors hover around 1.0 in both directions.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::classification::AgeBracket;

/// The multiplier applied when a level has no tabulated value.
pub const NEUTRAL_MULTIPLIER: f64 = 1.0;

/// Families of risk multipliers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskCategory {
    Smoking,
    Alcohol,
    BodyMass,
    DiseaseSeverity,
}

/// Category → level → multiplier.
///
/// Levels are stored lowercase and matched case-insensitively. Unknown
/// levels resolve to [`NEUTRAL_MULTIPLIER`].
#[derive(Debug, Clone, Default)]
pub struct RiskMultiplierTable {
    entries: HashMap<RiskCategory, HashMap<String, f64>>,
}

impl RiskMultiplierTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces one level's multiplier.
    pub fn with(mut self, category: RiskCategory, level: &str, multiplier: f64) -> Self {
        self.entries
            .entry(category)
            .or_default()
            .insert(level.to_ascii_lowercase(), multiplier);
        self
    }

    /// Tabulated multiplier, or neutral when the level is unknown.
    pub fn multiplier(&self, category: RiskCategory, level: &str) -> f64 {
        self.lookup(category, level).unwrap_or(NEUTRAL_MULTIPLIER)
    }

    /// Tabulated multiplier without the neutral fallback.
    pub fn lookup(&self, category: RiskCategory, level: &str) -> Option<f64> {
        self.entries
            .get(&category)?
            .get(&level.to_ascii_lowercase())
            .copied()
    }
}

/// Multipliers per age bracket.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeMultiplierTable {
    pub young: f64,
    pub middle: f64,
    pub senior: f64,
    pub elderly: f64,
}

impl AgeMultiplierTable {
    pub fn multiplier(&self, bracket: AgeBracket) -> f64 {
        match bracket {
            AgeBracket::Young => self.young,
            AgeBracket::Middle => self.middle,
            AgeBracket::Senior => self.senior,
            AgeBracket::Elderly => self.elderly,
        }
    }
}

/// Healthcare, lifestyle and environment factors for one country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CountryFactors {
    pub healthcare: f64,
    pub lifestyle: f64,
    pub environment: f64,
}

impl CountryFactors {
    pub const fn new(healthcare: f64, lifestyle: f64, environment: f64) -> Self {
        Self {
            healthcare,
            lifestyle,
            environment,
        }
    }

    /// Product of all three factors.
    pub fn composite(&self) -> f64 {
        self.healthcare * self.lifestyle * self.environment
    }
}

/// Country code → factors, with a default used for unlisted codes.
#[derive(Debug, Clone)]
pub struct CountryFactorTable {
    entries: HashMap<String, CountryFactors>,
    default_factors: CountryFactors,
}

impl CountryFactorTable {
    pub fn new(default_factors: CountryFactors) -> Self {
        Self {
            entries: HashMap::new(),
            default_factors,
        }
    }

    pub fn with_country(mut self, code: impl Into<String>, factors: CountryFactors) -> Self {
        self.entries.insert(code.into(), factors);
        self
    }

    /// Factors for a country, or the default factors.
    pub fn factors(&self, country: &str) -> &CountryFactors {
        self.entries.get(country).unwrap_or(&self.default_factors)
    }

    pub fn composite(&self, country: &str) -> f64 {
        self.factors(country).composite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smoking_table() -> RiskMultiplierTable {
        RiskMultiplierTable::new()
            .with(RiskCategory::Smoking, "light", 0.95)
            .with(RiskCategory::Smoking, "Heavy", 0.80)
    }

    #[test]
    fn risk_lookup_is_case_insensitive() {
        let table = smoking_table();
        assert_eq!(table.multiplier(RiskCategory::Smoking, "LIGHT"), 0.95);
        assert_eq!(table.multiplier(RiskCategory::Smoking, "heavy"), 0.80);
    }

    #[test]
    fn unknown_level_is_neutral() {
        let table = smoking_table();
        assert_eq!(table.multiplier(RiskCategory::Smoking, "chain"), NEUTRAL_MULTIPLIER);
        assert_eq!(table.lookup(RiskCategory::Smoking, "chain"), None);
    }

    #[test]
    fn missing_category_is_neutral() {
        let table = smoking_table();
        assert_eq!(table.multiplier(RiskCategory::Alcohol, "heavy"), NEUTRAL_MULTIPLIER);
    }

    #[test]
    fn age_table_maps_each_bracket() {
        let table = AgeMultiplierTable {
            young: 1.05,
            middle: 1.0,
            senior: 0.95,
            elderly: 0.90,
        };
        assert_eq!(table.multiplier(AgeBracket::Young), 1.05);
        assert_eq!(table.multiplier(AgeBracket::Elderly), 0.90);
    }

    #[test]
    fn composite_multiplies_factors() {
        let factors = CountryFactors::new(1.02, 0.98, 0.99);
        assert!((factors.composite() - 0.989_604).abs() < 1e-12);
    }

    #[test]
    fn country_factor_table_falls_back_to_default() {
        let table = CountryFactorTable::new(CountryFactors::new(1.0, 1.0, 1.0))
            .with_country("JPN", CountryFactors::new(1.05, 1.03, 1.04));
        assert_eq!(table.factors("JPN").healthcare, 1.05);
        assert_eq!(table.composite("XYZ"), 1.0);
        assert_eq!(table.factors("XYZ").environment, 1.0);
    }
}
