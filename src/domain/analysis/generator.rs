//! Analysis Generator - Explains a prediction.

use std::sync::Arc;

use crate::domain::classification::{body_mass_index, BodyMassCategory};
use crate::domain::foundation::round_to_tenth;
use crate::domain::profile::{AlcoholLevel, SmokingLevel, UserProfile};
use crate::domain::reference::{country_name, ReferenceData};
use crate::domain::scoring::Prediction;

use super::report::{AnalysisReport, CountryComparison, Factor, RiskLevel};

/// Builds the factor list, recommendations, risk level and country comparison.
#[derive(Debug, Clone)]
pub struct AnalysisGenerator {
    reference: Arc<ReferenceData>,
}

impl AnalysisGenerator {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self { reference }
    }

    /// Analyzes a profile against its prediction.
    ///
    /// Factors are considered in a fixed order: smoking, heavy alcohol,
    /// abnormal body mass, existing diseases.
    ///
    /// # Panics
    ///
    /// Panics if `profile.height_cm` is not positive.
    pub fn analyze(&self, profile: &UserProfile, prediction: Prediction) -> AnalysisReport {
        let mut factors = Vec::new();
        let mut recommendations = Vec::new();

        if profile.smoking != SmokingLevel::Never {
            factors.push(Factor::negative(
                "Smoking",
                "Smoking reduces life expectancy significantly",
            ));
            recommendations.push("Consider quitting smoking to improve life expectancy".to_string());
        }

        if profile.alcohol == AlcoholLevel::Heavy {
            factors.push(Factor::negative(
                "Alcohol",
                "Heavy alcohol consumption affects longevity",
            ));
            recommendations.push("Reduce alcohol consumption to moderate levels".to_string());
        }

        let bmi = body_mass_index(profile.weight_kg, profile.height_cm);
        let category = BodyMassCategory::from_index(bmi);
        if !category.is_normal() {
            factors.push(Factor::negative(
                "Body Mass Index",
                format!("{} body mass index can affect health outcomes", category),
            ));
            recommendations
                .push("Maintain a healthy body mass index through diet and exercise".to_string());
        }

        if !profile.diseases.is_empty() {
            factors.push(Factor::negative(
                "Health Conditions",
                "Existing health conditions require management",
            ));
            recommendations
                .push("Work with healthcare providers to manage existing conditions".to_string());
        }

        if let Some(baseline) = self.reference.baseline(&profile.country) {
            if prediction.years() < baseline.both {
                recommendations.push(format!(
                    "Your prediction is below the average for {} ({} years). \
                     Focus on improving lifestyle factors.",
                    country_name(&profile.country),
                    baseline.both
                ));
            }
        }

        let risk_level = RiskLevel::from_factor_count(factors.len());

        AnalysisReport {
            prediction,
            factors,
            recommendations,
            risk_level,
            country_comparison: self.country_comparison(&profile.country, prediction),
            body_mass_index: round_to_tenth(bmi),
        }
    }

    /// Compares a prediction with the country's combined baseline.
    ///
    /// Uses a direct lookup: untabulated countries get `None` even though
    /// the scoring engine falls back to the default country for them.
    pub fn country_comparison(
        &self,
        country: &str,
        prediction: Prediction,
    ) -> Option<CountryComparison> {
        let average = self.reference.baseline(country)?.both;
        let difference = prediction.years() - average;

        Some(CountryComparison {
            country: country.to_string(),
            average,
            difference: round_to_tenth(difference),
            percentage: round_to_tenth(difference / average * 100.0),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analysis::Impact;
    use crate::domain::profile::{Gender, Severity};

    fn generator() -> AnalysisGenerator {
        AnalysisGenerator::new(ReferenceData::shared())
    }

    fn healthy() -> UserProfile {
        UserProfile::new("USA", Gender::Male, 180.0, 75.0, 40)
    }

    fn names(report: &AnalysisReport) -> Vec<&str> {
        report.factors.iter().map(|f| f.name.as_str()).collect()
    }

    #[test]
    fn healthy_profile_has_no_factors() {
        let report = generator().analyze(&healthy(), Prediction::from_years(80.0));
        assert!(report.factors.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn former_smoker_is_still_flagged() {
        let profile = healthy().with_smoking(SmokingLevel::Former);
        let report = generator().analyze(&profile, Prediction::from_years(80.0));
        assert_eq!(names(&report), vec!["Smoking"]);
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert!(report.recommendations[0].contains("quitting smoking"));
    }

    #[test]
    fn light_and_moderate_alcohol_are_not_flagged() {
        for level in [AlcoholLevel::Light, AlcoholLevel::Moderate] {
            let profile = healthy().with_alcohol(level);
            let report = generator().analyze(&profile, Prediction::from_years(80.0));
            assert!(report.factors.is_empty(), "{level}");
        }
    }

    #[test]
    fn heavy_alcohol_is_flagged() {
        let profile = healthy().with_alcohol(AlcoholLevel::Heavy);
        let report = generator().analyze(&profile, Prediction::from_years(80.0));
        assert_eq!(names(&report), vec!["Alcohol"]);
        assert_eq!(
            report.recommendations,
            vec!["Reduce alcohol consumption to moderate levels".to_string()]
        );
    }

    #[test]
    fn underweight_and_obese_are_both_negative() {
        for weight in [50.0, 110.0] {
            let mut profile = healthy();
            profile.weight_kg = weight;
            let report = generator().analyze(&profile, Prediction::from_years(80.0));
            assert_eq!(names(&report), vec!["Body Mass Index"]);
            assert_eq!(report.factors[0].impact, Impact::Negative);
        }
    }

    #[test]
    fn body_mass_description_names_category() {
        let mut profile = healthy();
        profile.weight_kg = 90.0; // bmi 27.8
        let report = generator().analyze(&profile, Prediction::from_years(80.0));
        assert_eq!(
            report.factors[0].description,
            "Overweight body mass index can affect health outcomes"
        );
    }

    #[test]
    fn factors_follow_fixed_order() {
        let mut profile = healthy()
            .with_disease("Asthma", Severity::Mild)
            .with_alcohol(AlcoholLevel::Heavy)
            .with_smoking(SmokingLevel::Light);
        profile.weight_kg = 110.0;

        let report = generator().analyze(&profile, Prediction::from_years(80.0));
        assert_eq!(
            names(&report),
            vec!["Smoking", "Alcohol", "Body Mass Index", "Health Conditions"]
        );
        assert_eq!(report.recommendations.len(), 4);
        assert_eq!(report.risk_level, RiskLevel::High);
    }

    #[test]
    fn risk_level_tracks_factor_count() {
        let generator = generator();
        let prediction = Prediction::from_years(80.0);

        let one = healthy().with_disease("Asthma", Severity::Mild);
        let two = one.clone().with_smoking(SmokingLevel::Heavy);
        let three = two.clone().with_alcohol(AlcoholLevel::Heavy);

        assert_eq!(generator.analyze(&one, prediction).risk_level, RiskLevel::Medium);
        assert_eq!(generator.analyze(&two, prediction).risk_level, RiskLevel::Medium);
        assert_eq!(generator.analyze(&three, prediction).risk_level, RiskLevel::High);
    }

    #[test]
    fn below_average_adds_country_recommendation() {
        let report = generator().analyze(&healthy(), Prediction::from_years(76.8));
        assert_eq!(report.recommendations.len(), 1);
        assert!(report.recommendations[0].contains("United States"));
        assert!(report.recommendations[0].contains("78.9 years"));
    }

    #[test]
    fn at_average_adds_no_country_recommendation() {
        let report = generator().analyze(&healthy(), Prediction::from_years(78.9));
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn comparison_is_rounded() {
        let comparison = generator()
            .country_comparison("USA", Prediction::from_years(76.8))
            .unwrap();
        assert_eq!(comparison.country, "USA");
        assert_eq!(comparison.average, 78.9);
        assert_eq!(comparison.difference, -2.1);
        assert_eq!(comparison.percentage, -2.7);
    }

    #[test]
    fn comparison_above_average_is_positive() {
        let comparison = generator()
            .country_comparison("JPN", Prediction::from_years(90.0))
            .unwrap();
        assert_eq!(comparison.difference, 5.3);
        assert_eq!(comparison.percentage, 6.3);
    }

    #[test]
    fn unknown_country_has_no_comparison_or_country_recommendation() {
        let mut profile = healthy();
        profile.country = "XYZ".to_string();
        let report = generator().analyze(&profile, Prediction::from_years(50.0));
        assert!(report.country_comparison.is_none());
        assert!(report.recommendations.is_empty());
    }

    #[test]
    fn report_carries_rounded_bmi() {
        let report = generator().analyze(&healthy(), Prediction::from_years(80.0));
        assert_eq!(report.body_mass_index, 23.1);
    }
}
