//! End-to-end prediction scenarios through the public library API.
//!
//! These tests pin the golden values of the scoring model:
//! 1. A healthy reference profile
//! 2. A high-risk profile that hits the age floor
//! 3. An unknown country, which predicts via the default baseline but has
//!    no country comparison

use proptest::prelude::*;

use life_predictor::application::handlers::{
    PredictLifeExpectancyCommand, PredictLifeExpectancyHandler,
};
use life_predictor::domain::analysis::{AnalysisGenerator, Impact, RiskLevel};
use life_predictor::domain::foundation::round_to_tenth;
use life_predictor::domain::profile::{
    AlcoholLevel, Gender, Severity, SmokingLevel, UserProfile, MAX_AGE, MAX_HEIGHT_CM,
    MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
use life_predictor::domain::reference::{ReferenceData, SUPPORTED_COUNTRIES};
use life_predictor::domain::scoring::ScoringEngine;

// =============================================================================
// Test Infrastructure
// =============================================================================

fn engine() -> ScoringEngine {
    ScoringEngine::new(ReferenceData::shared())
}

fn generator() -> AnalysisGenerator {
    AnalysisGenerator::new(ReferenceData::shared())
}

/// USA, male, 40, 180 cm, 75 kg, no lifestyle risks.
fn scenario_a() -> UserProfile {
    UserProfile::new("USA", Gender::Male, 180.0, 75.0, 40)
}

fn scenario_b() -> UserProfile {
    scenario_a()
        .with_smoking(SmokingLevel::Heavy)
        .with_alcohol(AlcoholLevel::Heavy)
        .with_disease("Coronary artery disease", Severity::Severe)
}

fn scenario_c() -> UserProfile {
    UserProfile::new("XYZ", Gender::Male, 180.0, 75.0, 40)
}

// =============================================================================
// Golden scenarios
// =============================================================================

#[test]
fn scenario_a_healthy_reference_profile() {
    let profile = scenario_a();
    let prediction = engine().predict(&profile);

    // 76.1 × 1.0 (middle) × 1.02 (tall, normal) × 1.02 × 0.98 × 0.99 = 76.815…
    assert_eq!(prediction.years(), 76.8);

    let report = generator().analyze(&profile, prediction);
    assert_eq!(report.risk_level, RiskLevel::Low);
    assert!(report.factors.is_empty());
    assert_eq!(report.body_mass_index, 23.1);

    let comparison = report.country_comparison.expect("USA has a baseline");
    assert_eq!(comparison.average, 78.9);
    assert_eq!(comparison.difference, -2.1);
    assert_eq!(comparison.percentage, -2.7);
    assert_eq!(
        report.recommendations,
        vec![
            "Your prediction is below the average for United States (78.9 years). \
             Focus on improving lifestyle factors."
                .to_string()
        ]
    );
}

#[test]
fn scenario_b_high_risk_profile() {
    let profile = scenario_b();
    let prediction = engine().predict(&profile);
    let baseline = engine().predict(&scenario_a());

    // 76.815 × 0.80 × 0.85 × 0.80 ≈ 41.8, raised to the floor of 40 + 5.
    assert_eq!(prediction.years(), 45.0);
    assert!(prediction < baseline);

    let report = generator().analyze(&profile, prediction);
    assert_eq!(report.risk_level, RiskLevel::High);

    let names: Vec<_> = report.factors.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, vec!["Smoking", "Alcohol", "Health Conditions"]);
    assert!(report.factors.iter().all(|f| f.impact == Impact::Negative));
}

#[test]
fn scenario_c_unknown_country_predicts_without_comparison() {
    let profile = scenario_c();
    let prediction = engine().predict(&profile);

    assert!(prediction.years().is_finite());
    assert_eq!(prediction.years(), engine().predict(&scenario_a()).years());

    let report = generator().analyze(&profile, prediction);
    assert!(report.country_comparison.is_none());
    assert!(report.recommendations.is_empty());
}

#[test]
fn scenario_c_is_rejected_by_the_command_handler() {
    let handler = PredictLifeExpectancyHandler::new(ReferenceData::shared());
    let err = handler
        .handle(PredictLifeExpectancyCommand {
            profile: scenario_c(),
        })
        .unwrap_err();

    assert_eq!(err.field(), "country");
}

#[test]
fn every_supported_country_has_a_comparison() {
    for country in SUPPORTED_COUNTRIES {
        let profile = UserProfile::new(country.code, Gender::Female, 165.0, 60.0, 35);
        let prediction = engine().predict(&profile);
        let report = generator().analyze(&profile, prediction);
        assert!(
            report.country_comparison.is_some(),
            "missing comparison for {}",
            country.code
        );
    }
}

#[test]
fn every_country_and_gender_has_a_baseline() {
    let reference = ReferenceData::shared();
    for country in SUPPORTED_COUNTRIES {
        for gender in Gender::ALL {
            let years = reference.base_expectancy(country.code, *gender);
            assert!(years > 0.0, "{} / {}", country.code, gender);
        }
    }
}

// =============================================================================
// Properties
// =============================================================================

fn valid_profile() -> impl Strategy<Value = UserProfile> {
    (
        0..SUPPORTED_COUNTRIES.len(),
        prop::sample::select(Gender::ALL),
        MIN_HEIGHT_CM..=MAX_HEIGHT_CM,
        MIN_WEIGHT_KG..=MAX_WEIGHT_KG,
        MIN_AGE..=MAX_AGE,
        prop::sample::select(SmokingLevel::ALL),
        prop::sample::select(AlcoholLevel::ALL),
        prop::collection::vec(prop::sample::select(Severity::ALL), 0..4),
    )
        .prop_map(
            |(country, gender, height, weight, age, smoking, alcohol, severities)| {
                let mut profile = UserProfile::new(
                    SUPPORTED_COUNTRIES[country].code,
                    gender,
                    height,
                    weight,
                    age,
                )
                .with_smoking(smoking)
                .with_alcohol(alcohol);
                for severity in severities {
                    profile = profile.with_disease("Condition", severity);
                }
                profile
            },
        )
}

proptest! {
    #[test]
    fn valid_profiles_pass_validation(profile in valid_profile()) {
        prop_assert!(profile.validate().is_ok());
    }

    #[test]
    fn prediction_is_at_least_five_years_beyond_age(profile in valid_profile()) {
        let prediction = engine().predict(&profile);
        prop_assert!(prediction.years() >= profile.age_years() + 5.0);
    }

    #[test]
    fn prediction_is_already_rounded(profile in valid_profile()) {
        let years = engine().predict(&profile).years();
        prop_assert_eq!(round_to_tenth(years), years);
    }

    #[test]
    fn risk_level_follows_factor_count(profile in valid_profile()) {
        let prediction = engine().predict(&profile);
        let report = generator().analyze(&profile, prediction);
        prop_assert_eq!(report.risk_level, RiskLevel::from_factor_count(report.factors.len()));
    }
}
