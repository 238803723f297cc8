//! Per-step record of how a prediction was assembled.

use serde::{Deserialize, Serialize};

use crate::domain::classification::{AgeBracket, BodyMassCategory};

/// Every input to the final product, in application order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiplierBreakdown {
    pub base_years: f64,
    pub age_bracket: AgeBracket,
    pub age: f64,
    pub smoking: f64,
    pub alcohol: f64,
    pub disease: f64,
    pub body_mass_category: BodyMassCategory,
    pub body_mass_index: f64,
    /// Body-mass multiplier including the stature adjustment.
    pub body_mass: f64,
    pub country: f64,
}

impl MultiplierBreakdown {
    /// Base years scaled by each multiplier in turn, before the age floor.
    pub fn adjusted_years(&self) -> f64 {
        self.base_years
            * self.age
            * self.smoking
            * self.alcohol
            * self.disease
            * self.body_mass
            * self.country
    }
}
