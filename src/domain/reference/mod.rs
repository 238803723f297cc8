//! Reference Module - Immutable tables behind every prediction.
//!
//! # Components
//!
//! - `BaselineTable` - life expectancy at birth by country and gender
//! - `RiskMultiplierTable` - smoking, alcohol, body-mass and disease multipliers
//! - `AgeMultiplierTable` - per age bracket
//! - `CountryFactorTable` - healthcare, lifestyle and environment factors
//! - `SUPPORTED_COUNTRIES` - the country catalogue shared with input validation
//!
//! `ReferenceData` bundles the four tables. It is built once, never mutated,
//! and handed to the scoring engine and analysis generator behind an `Arc`.

mod baseline;
mod countries;
mod multipliers;
mod standard;

pub use baseline::{Baseline, BaselineTable};
pub use countries::{
    country_name, find_country, is_supported_country, Country, DEFAULT_COUNTRY_CODE,
    SUPPORTED_COUNTRIES,
};
pub use multipliers::{
    AgeMultiplierTable, CountryFactorTable, CountryFactors, RiskCategory, RiskMultiplierTable,
    NEUTRAL_MULTIPLIER,
};

use crate::domain::classification::AgeBracket;
use crate::domain::profile::Gender;

/// The complete set of reference tables.
#[derive(Debug, Clone)]
pub struct ReferenceData {
    baselines: BaselineTable,
    risks: RiskMultiplierTable,
    ages: AgeMultiplierTable,
    countries: CountryFactorTable,
}

impl ReferenceData {
    pub fn new(
        baselines: BaselineTable,
        risks: RiskMultiplierTable,
        ages: AgeMultiplierTable,
        countries: CountryFactorTable,
    ) -> Self {
        Self {
            baselines,
            risks,
            ages,
            countries,
        }
    }

    /// Baseline years for (country, gender). Total: unknown genders use the
    /// country's combined figure and unknown countries use the default country.
    pub fn base_expectancy(&self, country: &str, gender: Gender) -> f64 {
        self.baselines.base_expectancy(country, gender)
    }

    /// Direct baseline lookup, `None` for untabulated countries.
    pub fn baseline(&self, country: &str) -> Option<&Baseline> {
        self.baselines.get(country)
    }

    /// Risk multiplier for a level; unknown levels are neutral.
    pub fn multiplier(&self, category: RiskCategory, level: &str) -> f64 {
        self.risks.multiplier(category, level)
    }

    pub fn age_multiplier(&self, bracket: AgeBracket) -> f64 {
        self.ages.multiplier(bracket)
    }

    /// healthcare × lifestyle × environment for the country.
    pub fn country_composite(&self, country: &str) -> f64 {
        self.countries.composite(country)
    }
}
