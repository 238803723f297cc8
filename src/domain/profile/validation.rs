//! Input domain checks for [`UserProfile`].
//!
//! These mirror the ranges enforced at data entry. The scoring engine never
//! calls them; callers validate before predicting.

use crate::domain::foundation::ValidationError;
use crate::domain::reference::is_supported_country;

use super::user_profile::UserProfile;

pub const MIN_HEIGHT_CM: f64 = 100.0;
pub const MAX_HEIGHT_CM: f64 = 250.0;
pub const MIN_WEIGHT_KG: f64 = 30.0;
pub const MAX_WEIGHT_KG: f64 = 300.0;
pub const MIN_AGE: u32 = 1;
pub const MAX_AGE: u32 = 120;

impl UserProfile {
    /// Checks every field against its declared domain.
    ///
    /// Returns the first violation found, in field order.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let country = self.country.trim();
        if country.is_empty() {
            return Err(ValidationError::empty_field("country"));
        }
        if !is_supported_country(country) {
            return Err(ValidationError::unsupported_value("country", country));
        }
        if !self.gender.is_recognized() {
            return Err(ValidationError::unsupported_value("gender", self.gender.as_str()));
        }

        check_range("height", self.height_cm, MIN_HEIGHT_CM, MAX_HEIGHT_CM)?;
        check_range("weight", self.weight_kg, MIN_WEIGHT_KG, MAX_WEIGHT_KG)?;
        check_range(
            "age",
            self.age_years(),
            f64::from(MIN_AGE),
            f64::from(MAX_AGE),
        )?;

        if !self.smoking.is_recognized() {
            return Err(ValidationError::unsupported_value("smoking", self.smoking.as_str()));
        }
        if !self.alcohol.is_recognized() {
            return Err(ValidationError::unsupported_value("alcohol", self.alcohol.as_str()));
        }

        for (index, disease) in self.diseases.iter().enumerate() {
            if disease.name.trim().is_empty() {
                return Err(ValidationError::empty_field(format!("diseases[{}].name", index)));
            }
            if !disease.severity.is_recognized() {
                return Err(ValidationError::unsupported_value(
                    format!("diseases[{}].severity", index),
                    disease.severity.as_str(),
                ));
            }
        }

        Ok(())
    }
}

fn check_range(field: &str, value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::invalid_format(field, "must be a finite number"));
    }
    if value < min || value > max {
        return Err(ValidationError::out_of_range(field, min, max, value));
    }
    Ok(())
}
