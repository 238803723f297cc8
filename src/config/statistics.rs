//! Statistics source configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// WHO Global Health Observatory settings
#[derive(Debug, Clone, Deserialize)]
pub struct StatisticsConfig {
    /// OData API root
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Life expectancy indicator code
    #[serde(default = "default_indicator")]
    pub indicator: String,

    /// Upstream request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Rows requested for the per-country listing
    #[serde(default = "default_global_limit")]
    pub global_limit: u32,

    /// Rows requested when aggregating regions
    #[serde(default = "default_regional_limit")]
    pub regional_limit: u32,

    /// Serve the built-in sample set without contacting the WHO
    #[serde(default)]
    pub use_sample_data: bool,
}

impl StatisticsConfig {
    /// Upstream timeout as a [`Duration`]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Validate statistics configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ValidationError::InvalidStatisticsUrl(self.base_url.clone()));
        }
        if self.indicator.trim().is_empty() {
            return Err(ValidationError::MissingIndicator);
        }
        if self.timeout_secs == 0 || self.timeout_secs > 120 {
            return Err(ValidationError::InvalidStatisticsTimeout);
        }
        if self.global_limit == 0 || self.regional_limit == 0 {
            return Err(ValidationError::InvalidRowLimit);
        }
        Ok(())
    }
}

impl Default for StatisticsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            indicator: default_indicator(),
            timeout_secs: default_timeout(),
            global_limit: default_global_limit(),
            regional_limit: default_regional_limit(),
            use_sample_data: false,
        }
    }
}

fn default_base_url() -> String {
    "https://ghoapi.azureedge.net/api".to_string()
}

fn default_indicator() -> String {
    "WHOSIS_000001".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_global_limit() -> u32 {
    100
}

fn default_regional_limit() -> u32 {
    1000
}
