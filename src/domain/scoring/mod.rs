//! Scoring Module - Deterministic lifespan prediction.
//!
//! `ScoringEngine::predict` multiplies the country/gender baseline by the age,
//! smoking, alcohol, disease, body-mass and country multipliers, then floors
//! the result at five years beyond the current age.
//!
//! All functions are pure. The engine holds only an `Arc<ReferenceData>`.

mod breakdown;
mod engine;
mod prediction;

pub use breakdown::MultiplierBreakdown;
pub use engine::{
    apply_age_floor, ScoringEngine, FORMER_SMOKER_MULTIPLIER, MINIMUM_REMAINING_YEARS,
    TALL_STATURE_MULTIPLIER, TALL_STATURE_THRESHOLD_CM,
};
pub use prediction::Prediction;
