//! PredictLifeExpectancy - Command handler for scoring a profile.
//!
//! Validates the profile, runs the scoring engine, and explains the result.
//! Pure computation: no ports are involved.

use std::sync::Arc;

use crate::domain::analysis::{AnalysisGenerator, AnalysisReport};
use crate::domain::foundation::ValidationError;
use crate::domain::profile::UserProfile;
use crate::domain::reference::ReferenceData;
use crate::domain::scoring::{MultiplierBreakdown, ScoringEngine};

/// Command to predict life expectancy for one profile.
#[derive(Debug, Clone)]
pub struct PredictLifeExpectancyCommand {
    pub profile: UserProfile,
}

/// Result of a successful prediction.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictLifeExpectancyResult {
    pub report: AnalysisReport,
    pub breakdown: MultiplierBreakdown,
}

/// Handler for life expectancy predictions.
pub struct PredictLifeExpectancyHandler {
    engine: ScoringEngine,
    generator: AnalysisGenerator,
}

impl PredictLifeExpectancyHandler {
    pub fn new(reference: Arc<ReferenceData>) -> Self {
        Self {
            engine: ScoringEngine::new(Arc::clone(&reference)),
            generator: AnalysisGenerator::new(reference),
        }
    }

    pub fn handle(
        &self,
        cmd: PredictLifeExpectancyCommand,
    ) -> Result<PredictLifeExpectancyResult, ValidationError> {
        let profile = cmd.profile;
        if let Err(err) = profile.validate() {
            tracing::debug!(field = err.field(), error = %err, "Rejected profile");
            return Err(err);
        }

        let breakdown = self.engine.breakdown(&profile);
        let prediction = self.engine.predict(&profile);
        let report = self.generator.analyze(&profile, prediction);

        tracing::debug!(
            country = %profile.country,
            prediction = prediction.years(),
            factors = report.factors.len(),
            risk_level = %report.risk_level,
            "Computed prediction"
        );

        Ok(PredictLifeExpectancyResult { report, breakdown })
    }
}
