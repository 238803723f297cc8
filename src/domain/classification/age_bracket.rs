//! Age brackets.

use serde::{Deserialize, Serialize};

/// Coarse life stage used to scale the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeBracket {
    /// Under 30.
    Young,
    /// 30 to 49.
    Middle,
    /// 50 to 69.
    Senior,
    /// 70 and over.
    Elderly,
}

impl AgeBracket {
    pub fn from_age(age: u32) -> Self {
        match age {
            0..=29 => Self::Young,
            30..=49 => Self::Middle,
            50..=69 => Self::Senior,
            _ => Self::Elderly,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Young => "young",
            Self::Middle => "middle",
            Self::Senior => "senior",
            Self::Elderly => "elderly",
        }
    }
}
