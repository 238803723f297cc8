//! Scoring Engine - Baseline × adjustments, floored at five remaining years.

use std::sync::Arc;

use crate::domain::classification::{body_mass_index, AgeBracket, BodyMassCategory};
use crate::domain::profile::{AlcoholLevel, Disease, Severity, SmokingLevel, UserProfile};
use crate::domain::reference::{ReferenceData, RiskCategory, NEUTRAL_MULTIPLIER};

use super::breakdown::MultiplierBreakdown;
use super::prediction::Prediction;

/// Residual risk for someone who has quit smoking.
pub const FORMER_SMOKER_MULTIPLIER: f64 = 0.98;

/// Heights strictly above this earn the stature bonus.
pub const TALL_STATURE_THRESHOLD_CM: f64 = 170.0;

/// Stature bonus applied on top of the body-mass multiplier.
pub const TALL_STATURE_MULTIPLIER: f64 = 1.02;

/// Minimum predicted years beyond the current age.
pub const MINIMUM_REMAINING_YEARS: f64 = 5.0;

/// Turns a profile into a single predicted lifespan.
///
/// The engine is stateless apart from its shared, read-only reference data,
/// so one instance can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct ScoringEngine {
    reference: Arc<ReferenceData>,
}

impl ScoringEngine {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Predicts lifespan in years, rounded to one decimal place.
    ///
    /// The result is never below `profile.age + 5`.
    ///
    /// # Panics
    ///
    /// Panics if `profile.height_cm` is not positive.
    pub fn predict(&self, profile: &UserProfile) -> Prediction {
        let breakdown = self.breakdown(profile);
        let floored = apply_age_floor(breakdown.adjusted_years(), profile.age_years());
        Prediction::from_years(floored)
    }

    /// Computes every multiplier that feeds [`ScoringEngine::predict`].
    pub fn breakdown(&self, profile: &UserProfile) -> MultiplierBreakdown {
        let age_bracket = AgeBracket::from_age(profile.age);
        let bmi = body_mass_index(profile.weight_kg, profile.height_cm);
        let body_mass_category = BodyMassCategory::from_index(bmi);

        MultiplierBreakdown {
            base_years: self
                .reference
                .base_expectancy(&profile.country, profile.gender),
            age_bracket,
            age: self.reference.age_multiplier(age_bracket),
            smoking: self.smoking_multiplier(profile.smoking),
            alcohol: self.alcohol_multiplier(profile.alcohol),
            disease: self.disease_multiplier(&profile.diseases),
            body_mass_category,
            body_mass_index: bmi,
            body_mass: self.body_mass_multiplier(body_mass_category, profile.height_cm),
            country: self.reference.country_composite(&profile.country),
        }
    }

    pub fn smoking_multiplier(&self, level: SmokingLevel) -> f64 {
        match level {
            SmokingLevel::Never | SmokingLevel::Unrecognized => NEUTRAL_MULTIPLIER,
            SmokingLevel::Former => FORMER_SMOKER_MULTIPLIER,
            SmokingLevel::Light | SmokingLevel::Moderate | SmokingLevel::Heavy => self
                .reference
                .multiplier(RiskCategory::Smoking, level.as_str()),
        }
    }

    pub fn alcohol_multiplier(&self, level: AlcoholLevel) -> f64 {
        match level {
            AlcoholLevel::None | AlcoholLevel::Unrecognized => NEUTRAL_MULTIPLIER,
            AlcoholLevel::Light | AlcoholLevel::Moderate | AlcoholLevel::Heavy => self
                .reference
                .multiplier(RiskCategory::Alcohol, level.as_str()),
        }
    }

    pub fn severity_multiplier(&self, severity: Severity) -> f64 {
        match severity {
            Severity::Unrecognized => NEUTRAL_MULTIPLIER,
            Severity::Mild | Severity::Moderate | Severity::Severe => self
                .reference
                .multiplier(RiskCategory::DiseaseSeverity, severity.as_str()),
        }
    }

    /// Product of every disease's severity multiplier.
    ///
    /// Diseases compound with no lower bound; an empty list is neutral.
    pub fn disease_multiplier(&self, diseases: &[Disease]) -> f64 {
        diseases
            .iter()
            .map(|disease| self.severity_multiplier(disease.severity))
            .product()
    }

    /// Body-mass multiplier scaled by the stature bonus.
    pub fn body_mass_multiplier(&self, category: BodyMassCategory, height_cm: f64) -> f64 {
        let stature = if height_cm > TALL_STATURE_THRESHOLD_CM {
            TALL_STATURE_MULTIPLIER
        } else {
            NEUTRAL_MULTIPLIER
        };
        self.reference
            .multiplier(RiskCategory::BodyMass, category.as_str())
            * stature
    }
}

/// Ensures at least [`MINIMUM_REMAINING_YEARS`] remain beyond `age`.
pub fn apply_age_floor(adjusted_years: f64, age: f64) -> f64 {
    let remaining = adjusted_years - age;
    age + remaining.max(MINIMUM_REMAINING_YEARS)
}
