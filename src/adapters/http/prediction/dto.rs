//! HTTP DTOs for prediction endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use serde::{Deserialize, Serialize};

use crate::application::handlers::PredictLifeExpectancyResult;
use crate::domain::analysis::{CountryComparison, Factor, RiskLevel};
use crate::domain::profile::{AlcoholLevel, Gender, Severity, SmokingLevel, UserProfile};
use crate::domain::reference::Country;
use crate::domain::scoring::MultiplierBreakdown;

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to predict life expectancy.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionRequest {
    pub country: String,
    pub gender: Gender,
    /// Centimetres.
    pub height: f64,
    /// Kilograms.
    pub weight: f64,
    pub age: u32,
    #[serde(default)]
    pub smoking: Option<SmokingLevel>,
    #[serde(default, alias = "alcohol")]
    pub alcohol_consumption: Option<AlcoholLevel>,
    #[serde(default)]
    pub diseases: Vec<DiseaseRequest>,
}

/// One reported health condition.
#[derive(Debug, Clone, Deserialize)]
pub struct DiseaseRequest {
    pub name: String,
    pub severity: Severity,
}

impl From<PredictionRequest> for UserProfile {
    fn from(req: PredictionRequest) -> Self {
        let profile = UserProfile::new(req.country, req.gender, req.height, req.weight, req.age)
            .with_smoking(req.smoking.unwrap_or(SmokingLevel::Never))
            .with_alcohol(req.alcohol_consumption.unwrap_or(AlcoholLevel::None));
        req.diseases
            .into_iter()
            .fold(profile, |profile, d| profile.with_disease(d.name, d.severity))
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Prediction with its explanation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResponse {
    /// Predicted lifespan in years, one decimal.
    pub prediction: f64,
    pub factors: Vec<Factor>,
    pub recommendations: Vec<String>,
    pub risk_level: RiskLevel,
    /// Human-readable risk level, e.g. "High Risk".
    pub risk_label: String,
    pub country_comparison: Option<CountryComparison>,
    pub body_mass_index: f64,
    pub breakdown: MultiplierBreakdown,
}

impl From<PredictLifeExpectancyResult> for PredictionResponse {
    fn from(result: PredictLifeExpectancyResult) -> Self {
        let report = result.report;
        Self {
            prediction: report.prediction.years(),
            factors: report.factors,
            recommendations: report.recommendations,
            risk_level: report.risk_level,
            risk_label: report.risk_level.label().to_string(),
            country_comparison: report.country_comparison,
            body_mass_index: report.body_mass_index,
            breakdown: result.breakdown,
        }
    }
}

/// Supported country for the input form.
#[derive(Debug, Clone, Serialize)]
pub struct CountryResponse {
    pub code: String,
    pub name: String,
    pub region: String,
}

impl From<&Country> for CountryResponse {
    fn from(country: &Country) -> Self {
        Self {
            code: country.code.to_string(),
            name: country.name.to_string(),
            region: country.region.to_string(),
        }
    }
}
