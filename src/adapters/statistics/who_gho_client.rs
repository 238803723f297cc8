//! WHO Global Health Observatory client.
//!
//! Reads the life-expectancy-at-birth indicator from the GHO OData API.
//!
//! # Configuration
//!
//! ```ignore
//! let config = WhoGhoConfig::new()
//!     .with_base_url("https://ghoapi.azureedge.net/api")
//!     .with_timeout(Duration::from_secs(10));
//!
//! let client = WhoGhoClient::new(config)?;
//! let global = client.fetch_global_stats().await?;
//! ```

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use crate::config::StatisticsConfig;
use crate::domain::reference::country_name;
use crate::ports::{
    CountryStatistic, RegionalStatistic, RegionalStatistics, StatisticsError, StatisticsService,
};

/// Region used for observations without a parent location.
pub const UNKNOWN_REGION: &str = "Unknown";

/// OData filter selecting the both-sexes series.
const BOTH_SEXES_FILTER: &str = "Dim1 eq 'SEX_BTSX'";

/// Configuration for the GHO client.
#[derive(Debug, Clone)]
pub struct WhoGhoConfig {
    /// Base URL of the OData API.
    pub base_url: String,
    /// Indicator code (life expectancy at birth is `WHOSIS_000001`).
    pub indicator: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Rows requested for the global listing.
    pub global_limit: u32,
    /// Rows requested when aggregating regions.
    pub regional_limit: u32,
}

impl WhoGhoConfig {
    pub fn new() -> Self {
        Self {
            base_url: "https://ghoapi.azureedge.net/api".to_string(),
            indicator: "WHOSIS_000001".to_string(),
            timeout: Duration::from_secs(10),
            global_limit: 100,
            regional_limit: 1000,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    pub fn with_indicator(mut self, indicator: impl Into<String>) -> Self {
        self.indicator = indicator.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_limits(mut self, global_limit: u32, regional_limit: u32) -> Self {
        self.global_limit = global_limit;
        self.regional_limit = regional_limit;
        self
    }
}

impl Default for WhoGhoConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl From<&StatisticsConfig> for WhoGhoConfig {
    fn from(settings: &StatisticsConfig) -> Self {
        Self::new()
            .with_base_url(settings.base_url.clone())
            .with_indicator(settings.indicator.clone())
            .with_timeout(settings.timeout())
            .with_limits(settings.global_limit, settings.regional_limit)
    }
}

/// GHO OData response envelope.
#[derive(Debug, Deserialize)]
struct GhoResponse {
    #[serde(default)]
    value: Vec<GhoObservation>,
}

/// One indicator observation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct GhoObservation {
    pub spatial_dim: Option<String>,
    pub parent_location: Option<String>,
    pub time_dim: Option<i64>,
    pub numeric_value: Option<f64>,
}

impl GhoObservation {
    /// Observations without a numeric value count as zero.
    fn value(&self) -> f64 {
        self.numeric_value.unwrap_or(0.0)
    }

    fn to_country_statistic(&self) -> CountryStatistic {
        let code = self.spatial_dim.as_deref().unwrap_or_default();
        CountryStatistic::new(
            country_name(code),
            self.value(),
            self.time_dim.map(|y| y.to_string()).unwrap_or_default(),
        )
    }
}

/// Groups observations by region and averages their values.
pub fn aggregate_regions(observations: &[GhoObservation]) -> RegionalStatistics {
    let mut totals: RegionalStatistics = RegionalStatistics::new();
    for observation in observations {
        let region = observation
            .parent_location
            .as_deref()
            .filter(|r| !r.is_empty())
            .unwrap_or(UNKNOWN_REGION);
        let entry = totals
            .entry(region.to_string())
            .or_insert_with(|| RegionalStatistic::new(0.0, 0));
        entry.average += observation.value();
        entry.count += 1;
    }

    for stat in totals.values_mut() {
        stat.average /= f64::from(stat.count);
    }
    totals
}

/// reqwest-backed [`StatisticsService`].
pub struct WhoGhoClient {
    config: WhoGhoConfig,
    client: Client,
}

impl WhoGhoClient {
    pub fn new(config: WhoGhoConfig) -> Result<Self, StatisticsError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| StatisticsError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    fn indicator_url(&self) -> String {
        format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            self.config.indicator
        )
    }

    async fn fetch_observations(&self, top: u32) -> Result<Vec<GhoObservation>, StatisticsError> {
        let url = self.indicator_url();
        tracing::debug!(url = %url, top, "Fetching GHO observations");

        let response = self
            .client
            .get(&url)
            .query(&[("$filter", BOTH_SEXES_FILTER.to_string()), ("$top", top.to_string())])
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    StatisticsError::Timeout {
                        timeout_secs: self.config.timeout.as_secs(),
                    }
                } else if e.is_connect() {
                    StatisticsError::network(format!("Connection failed: {}", e))
                } else {
                    StatisticsError::network(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(url = %url, status = status.as_u16(), "GHO request failed");
            return Err(StatisticsError::UnexpectedStatus {
                status: status.as_u16(),
            });
        }

        let body: GhoResponse = response
            .json()
            .await
            .map_err(|e| StatisticsError::invalid_response(e.to_string()))?;

        tracing::debug!(rows = body.value.len(), "Fetched GHO observations");
        Ok(body.value)
    }
}

#[async_trait]
impl StatisticsService for WhoGhoClient {
    async fn fetch_global_stats(&self) -> Result<Vec<CountryStatistic>, StatisticsError> {
        let observations = self.fetch_observations(self.config.global_limit).await?;
        Ok(observations
            .iter()
            .map(GhoObservation::to_country_statistic)
            .collect())
    }

    async fn fetch_regional_stats(&self) -> Result<RegionalStatistics, StatisticsError> {
        let observations = self.fetch_observations(self.config.regional_limit).await?;
        Ok(aggregate_regions(&observations))
    }

    fn source_name(&self) -> &'static str {
        "who-gho"
    }
}
