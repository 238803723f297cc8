//! Profile Module - The input side of a prediction.
//!
//! - `UserProfile` / `Disease` - per-request subject attributes
//! - `Gender`, `SmokingLevel`, `AlcoholLevel`, `Severity` - closed level sets
//!   with a fail-open `Unrecognized` arm
//! - `UserProfile::validate` - data-entry range checks

mod levels;
mod user_profile;
mod validation;

pub use levels::{AlcoholLevel, Gender, Severity, SmokingLevel};
pub use user_profile::{Disease, UserProfile};
pub use validation::{
    MAX_AGE, MAX_HEIGHT_CM, MAX_WEIGHT_KG, MIN_AGE, MIN_HEIGHT_CM, MIN_WEIGHT_KG,
};
