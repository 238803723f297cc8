//! Analysis report types.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::scoring::Prediction;

/// Factor count at or above which risk is high.
pub const HIGH_RISK_FACTOR_COUNT: usize = 3;

/// Factor count at or above which risk is at least medium.
pub const MEDIUM_RISK_FACTOR_COUNT: usize = 1;

/// Direction in which a factor moves the prediction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Impact {
    Positive,
    Negative,
}

/// One contributor to the prediction, with a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Factor {
    pub name: String,
    pub impact: Impact,
    pub description: String,
}

impl Factor {
    pub fn negative(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            impact: Impact::Negative,
            description: description.into(),
        }
    }
}

/// Overall risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Determine classification from the number of flagged factors
    /// - High: 3 or more
    /// - Medium: 1 or 2
    /// - Low: none
    pub fn from_factor_count(count: usize) -> Self {
        if count >= HIGH_RISK_FACTOR_COUNT {
            Self::High
        } else if count >= MEDIUM_RISK_FACTOR_COUNT {
            Self::Medium
        } else {
            Self::Low
        }
    }

    /// Returns the display label for this risk level.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Low => "Low Risk",
            Self::Medium => "Medium Risk",
            Self::High => "High Risk",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Prediction relative to the country's combined-gender baseline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryComparison {
    pub country: String,
    /// Baseline years for both genders.
    pub average: f64,
    /// prediction − average, one decimal.
    pub difference: f64,
    /// difference / average × 100, one decimal.
    pub percentage: f64,
}

/// Everything the results view needs for one prediction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub prediction: Prediction,
    pub factors: Vec<Factor>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    /// Absent when the country has no tabulated baseline.
    pub country_comparison: Option<CountryComparison>,
    /// Body-mass index, one decimal.
    pub body_mass_index: f64,
}
