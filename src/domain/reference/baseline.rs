//! Baseline life expectancy by country and gender.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::domain::profile::Gender;

/// Life expectancy at birth, in years, for one country.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    pub male: f64,
    pub female: f64,
    pub both: f64,
}

impl Baseline {
    pub const fn new(male: f64, female: f64, both: f64) -> Self {
        Self { male, female, both }
    }

    /// Male and female have their own column; everything else uses `both`.
    pub fn for_gender(&self, gender: Gender) -> f64 {
        match gender {
            Gender::Male => self.male,
            Gender::Female => self.female,
            Gender::Other | Gender::Unrecognized => self.both,
        }
    }
}

/// Country code → baseline, with a designated default country.
///
/// The default entry is supplied at construction, so every lookup through
/// [`BaselineTable::base_expectancy`] resolves to a value.
#[derive(Debug, Clone)]
pub struct BaselineTable {
    entries: HashMap<String, Baseline>,
    default_country: String,
    default_baseline: Baseline,
}

impl BaselineTable {
    /// Creates a table containing only the default country.
    pub fn new(default_country: impl Into<String>, default_baseline: Baseline) -> Self {
        let default_country = default_country.into();
        let mut entries = HashMap::new();
        entries.insert(default_country.clone(), default_baseline);
        Self {
            entries,
            default_country,
            default_baseline,
        }
    }

    /// Adds or replaces a country's baseline.
    pub fn with_country(mut self, code: impl Into<String>, baseline: Baseline) -> Self {
        let code = code.into();
        if code == self.default_country {
            self.default_baseline = baseline;
        }
        self.entries.insert(code, baseline);
        self
    }

    /// Exact lookup with no fallback.
    pub fn get(&self, country: &str) -> Option<&Baseline> {
        self.entries.get(country)
    }

    /// Years for (country, gender), falling back to the default country.
    pub fn base_expectancy(&self, country: &str, gender: Gender) -> f64 {
        self.get(country)
            .unwrap_or(&self.default_baseline)
            .for_gender(gender)
    }
}
