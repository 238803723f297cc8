//! The WHO 2023 reference dataset.

use once_cell::sync::Lazy;
use std::sync::Arc;

use super::baseline::{Baseline, BaselineTable};
use super::countries::DEFAULT_COUNTRY_CODE;
use super::multipliers::{
    AgeMultiplierTable, CountryFactorTable, CountryFactors, RiskCategory, RiskMultiplierTable,
};
use super::ReferenceData;

/// Default-country rows, repeated in the tables below.
const DEFAULT_BASELINE: Baseline = Baseline::new(76.1, 81.1, 78.9);
const DEFAULT_FACTORS: CountryFactors = CountryFactors::new(1.02, 0.98, 0.99);

/// (code, male, female, both)
const BASELINES: &[(&str, f64, f64, f64)] = &[
    ("USA", 76.1, 81.1, 78.9),
    ("GBR", 79.4, 83.1, 81.2),
    ("CAN", 80.9, 84.1, 82.4),
    ("AUS", 81.2, 85.1, 83.2),
    ("DEU", 78.9, 83.6, 81.3),
    ("FRA", 79.7, 85.6, 82.7),
    ("ITA", 80.5, 85.2, 82.9),
    ("ESP", 80.1, 86.1, 83.1),
    ("JPN", 81.6, 87.7, 84.7),
    ("CHN", 74.8, 79.0, 76.9),
    ("IND", 67.5, 70.2, 68.8),
    ("BRA", 72.8, 79.1, 75.9),
    ("RUS", 66.5, 77.2, 71.8),
    ("MEX", 72.1, 77.9, 75.1),
    ("ZAF", 61.5, 66.6, 64.1),
    ("EGY", 70.1, 75.3, 72.7),
    ("NGA", 54.7, 55.7, 55.2),
    ("TUR", 75.6, 81.9, 78.8),
    ("IRN", 74.5, 77.7, 76.1),
    ("THA", 71.7, 78.8, 75.3),
    ("LKA", 72.1, 78.9, 75.5),
];

/// (code, healthcare, lifestyle, environment)
const COUNTRY_FACTORS: &[(&str, f64, f64, f64)] = &[
    ("USA", 1.02, 0.98, 0.99),
    ("GBR", 1.03, 0.99, 1.01),
    ("CAN", 1.04, 1.01, 1.02),
    ("AUS", 1.04, 1.02, 1.03),
    ("DEU", 1.03, 1.00, 1.01),
    ("FRA", 1.04, 1.01, 1.02),
    ("ITA", 1.03, 1.01, 1.01),
    ("ESP", 1.03, 1.01, 1.02),
    ("JPN", 1.05, 1.03, 1.04),
    ("CHN", 1.01, 0.98, 0.97),
    ("IND", 0.97, 0.95, 0.94),
    ("BRA", 0.99, 0.97, 0.96),
    ("RUS", 0.96, 0.93, 0.92),
    ("MEX", 0.98, 0.96, 0.95),
    ("ZAF", 0.94, 0.91, 0.90),
    ("EGY", 0.97, 0.94, 0.93),
    ("NGA", 0.92, 0.89, 0.88),
    ("TUR", 0.99, 0.96, 0.95),
    ("IRN", 0.98, 0.95, 0.94),
    ("THA", 0.99, 0.96, 0.95),
    ("LKA", 0.98, 0.96, 0.95),
];

/// (category, level, multiplier)
const RISK_MULTIPLIERS: &[(RiskCategory, &str, f64)] = &[
    (RiskCategory::Smoking, "light", 0.95),
    (RiskCategory::Smoking, "moderate", 0.90),
    (RiskCategory::Smoking, "heavy", 0.80),
    (RiskCategory::Alcohol, "light", 0.98),
    (RiskCategory::Alcohol, "moderate", 0.95),
    (RiskCategory::Alcohol, "heavy", 0.85),
    (RiskCategory::BodyMass, "underweight", 0.95),
    (RiskCategory::BodyMass, "normal", 1.0),
    (RiskCategory::BodyMass, "overweight", 0.97),
    (RiskCategory::BodyMass, "obese", 0.90),
    (RiskCategory::DiseaseSeverity, "none", 1.0),
    (RiskCategory::DiseaseSeverity, "mild", 0.95),
    (RiskCategory::DiseaseSeverity, "moderate", 0.90),
    (RiskCategory::DiseaseSeverity, "severe", 0.80),
];

const AGE_MULTIPLIERS: AgeMultiplierTable = AgeMultiplierTable {
    young: 1.05,
    middle: 1.0,
    senior: 0.95,
    elderly: 0.90,
};

static WHO_2023: Lazy<Arc<ReferenceData>> = Lazy::new(|| Arc::new(ReferenceData::who_2023()));

impl ReferenceData {
    /// Builds a fresh copy of the WHO 2023 tables.
    pub fn who_2023() -> Self {
        let baselines = BASELINES.iter().fold(
            BaselineTable::new(DEFAULT_COUNTRY_CODE, DEFAULT_BASELINE),
            |table, &(code, male, female, both)| {
                table.with_country(code, Baseline::new(male, female, both))
            },
        );

        let risks = RISK_MULTIPLIERS
            .iter()
            .fold(RiskMultiplierTable::new(), |table, &(category, level, value)| {
                table.with(category, level, value)
            });

        let countries = COUNTRY_FACTORS.iter().fold(
            CountryFactorTable::new(DEFAULT_FACTORS),
            |table, &(code, healthcare, lifestyle, environment)| {
                table.with_country(code, CountryFactors::new(healthcare, lifestyle, environment))
            },
        );

        ReferenceData::new(baselines, risks, AGE_MULTIPLIERS, countries)
    }

    /// The process-wide WHO 2023 tables, built on first use.
    pub fn shared() -> Arc<ReferenceData> {
        Arc::clone(&WHO_2023)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classification::AgeBracket;
    use crate::domain::profile::Gender;
    use crate::domain::reference::SUPPORTED_COUNTRIES;

    #[test]
    fn every_tabulated_pair_is_returned_exactly() {
        let data = ReferenceData::who_2023();
        for &(code, male, female, both) in BASELINES {
            assert_eq!(data.base_expectancy(code, Gender::Male), male, "{code} male");
            assert_eq!(data.base_expectancy(code, Gender::Female), female, "{code} female");
            assert_eq!(data.base_expectancy(code, Gender::Other), both, "{code} both");
        }
    }

    #[test]
    fn tables_cover_the_country_catalogue() {
        let data = ReferenceData::who_2023();
        assert_eq!(BASELINES.len(), SUPPORTED_COUNTRIES.len());
        for country in SUPPORTED_COUNTRIES {
            assert!(data.baseline(country.code).is_some(), "{}", country.code);
            assert!(
                COUNTRY_FACTORS.iter().any(|&(code, ..)| code == country.code),
                "{}",
                country.code
            );
        }
    }

    #[test]
    fn risk_multipliers_are_in_unit_interval() {
        for &(category, level, value) in RISK_MULTIPLIERS {
            assert!(value > 0.0 && value <= 1.0, "{category:?}/{level}");
        }
    }

    #[test]
    fn neutral_levels_are_exactly_one() {
        let data = ReferenceData::who_2023();
        assert_eq!(data.multiplier(RiskCategory::BodyMass, "normal"), 1.0);
        assert_eq!(data.multiplier(RiskCategory::DiseaseSeverity, "none"), 1.0);
    }

    #[test]
    fn age_multipliers_match_table() {
        let data = ReferenceData::who_2023();
        assert_eq!(data.age_multiplier(AgeBracket::Young), 1.05);
        assert_eq!(data.age_multiplier(AgeBracket::Middle), 1.0);
        assert_eq!(data.age_multiplier(AgeBracket::Senior), 0.95);
        assert_eq!(data.age_multiplier(AgeBracket::Elderly), 0.90);
    }

    #[test]
    fn default_rows_match_default_country() {
        let data = ReferenceData::who_2023();
        assert_eq!(data.baseline(DEFAULT_COUNTRY_CODE), Some(&DEFAULT_BASELINE));
        assert_eq!(
            data.country_composite(DEFAULT_COUNTRY_CODE),
            DEFAULT_FACTORS.composite()
        );
    }

    #[test]
    fn shared_returns_the_same_instance() {
        let a = ReferenceData::shared();
        let b = ReferenceData::shared();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
