//! Prediction value object.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::round_to_tenth;

/// Predicted lifespan in years, held at one decimal place.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Prediction(f64);

impl Prediction {
    /// Rounds `years` to one decimal place.
    pub fn from_years(years: f64) -> Self {
        Self(round_to_tenth(years))
    }

    pub fn years(&self) -> f64 {
        self.0
    }
}

impl From<Prediction> for f64 {
    fn from(prediction: Prediction) -> Self {
        prediction.0
    }
}

impl fmt::Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} years", self.0)
    }
}
