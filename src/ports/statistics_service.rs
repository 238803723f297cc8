//! Statistics Service Port - Interface for aggregate life expectancy data.
//!
//! The statistics view shows global and regional life expectancy figures
//! next to a prediction. This port abstracts where those figures come from
//! (the WHO Global Health Observatory, a fixed sample set, a test double).
//!
//! # Design
//!
//! - Both operations are fallible; callers decide the fallback policy
//! - The prediction core never depends on this port
//!
//! # Example
//!
//! ```ignore
//! use async_trait::async_trait;
//!
//! struct StaticStatistics;
//!
//! #[async_trait]
//! impl StatisticsService for StaticStatistics {
//!     async fn fetch_global_stats(&self) -> Result<Vec<CountryStatistic>, StatisticsError> {
//!         Ok(vec![CountryStatistic::new("Japan", 84.7, "2020")])
//!     }
//!     // ... other methods
//! }
//! ```

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Port for retrieving aggregate life expectancy statistics.
#[async_trait]
pub trait StatisticsService: Send + Sync {
    /// Life expectancy per country.
    async fn fetch_global_stats(&self) -> Result<Vec<CountryStatistic>, StatisticsError>;

    /// Average life expectancy per region, keyed by region name.
    async fn fetch_regional_stats(&self) -> Result<RegionalStatistics, StatisticsError>;

    /// Short name for logs (e.g. "who-gho", "sample").
    fn source_name(&self) -> &'static str;
}

/// Region name → aggregate.
pub type RegionalStatistics = BTreeMap<String, RegionalStatistic>;

/// Life expectancy for one country and year.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CountryStatistic {
    pub country: String,
    /// Years.
    pub value: f64,
    pub year: String,
}

impl CountryStatistic {
    pub fn new(country: impl Into<String>, value: f64, year: impl Into<String>) -> Self {
        Self {
            country: country.into(),
            value,
            year: year.into(),
        }
    }
}

/// Average life expectancy over the countries of a region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalStatistic {
    pub average: f64,
    pub count: u32,
}

impl RegionalStatistic {
    pub fn new(average: f64, count: u32) -> Self {
        Self { average, count }
    }
}

/// Statistics retrieval errors.
#[derive(Debug, thiserror::Error)]
pub enum StatisticsError {
    /// Network error during request.
    #[error("network error: {0}")]
    Network(String),

    /// Request timed out.
    #[error("request timed out after {timeout_secs}s")]
    Timeout {
        /// Configured timeout.
        timeout_secs: u64,
    },

    /// Upstream answered with a non-success status.
    #[error("unexpected status {status} from statistics source")]
    UnexpectedStatus {
        /// HTTP status code.
        status: u16,
    },

    /// Response body could not be interpreted.
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl StatisticsError {
    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Creates an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }
}
