//! Classification Module - Pure bucketing of raw measurements.

mod age_bracket;
mod body_mass;

pub use age_bracket::AgeBracket;
pub use body_mass::{
    body_mass_index, BodyMassCategory, NORMAL_LIMIT, OVERWEIGHT_LIMIT, UNDERWEIGHT_LIMIT,
};
