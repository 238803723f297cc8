//! Body-mass index and its categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Upper bound (exclusive) of the underweight band.
pub const UNDERWEIGHT_LIMIT: f64 = 18.5;
/// Upper bound (exclusive) of the normal band.
pub const NORMAL_LIMIT: f64 = 25.0;
/// Upper bound (exclusive) of the overweight band.
pub const OVERWEIGHT_LIMIT: f64 = 30.0;

/// Weight status derived from body-mass index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyMassCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl BodyMassCategory {
    /// Buckets a body-mass index. Each band excludes its upper bound, so
    /// 18.5 is normal, 25 is overweight and 30 is obese.
    pub fn from_index(bmi: f64) -> Self {
        if bmi < UNDERWEIGHT_LIMIT {
            Self::Underweight
        } else if bmi < NORMAL_LIMIT {
            Self::Normal
        } else if bmi < OVERWEIGHT_LIMIT {
            Self::Overweight
        } else {
            Self::Obese
        }
    }

    /// Lowercase name used as the reference table key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Underweight => "underweight",
            Self::Normal => "normal",
            Self::Overweight => "overweight",
            Self::Obese => "obese",
        }
    }

    pub fn is_normal(&self) -> bool {
        matches!(self, Self::Normal)
    }
}

impl fmt::Display for BodyMassCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Underweight => write!(f, "Underweight"),
            Self::Normal => write!(f, "Normal"),
            Self::Overweight => write!(f, "Overweight"),
            Self::Obese => write!(f, "Obese"),
        }
    }
}

/// Computes `weight / (height in metres)²`.
///
/// # Panics
///
/// Panics if `height_cm` is not strictly positive.
pub fn body_mass_index(weight_kg: f64, height_cm: f64) -> f64 {
    assert!(
        height_cm > 0.0,
        "body mass index requires a positive height, got {} cm",
        height_cm
    );
    let height_m = height_cm / 100.0;
    weight_kg / (height_m * height_m)
}
