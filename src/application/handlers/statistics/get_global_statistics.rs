//! GetGlobalStatistics - Query handler for the statistics view.
//!
//! Fetches global and regional figures concurrently from the primary source.
//! If either request fails, both are replaced by the fallback source so the
//! view never mixes live and sample data.

use serde::Serialize;
use std::sync::Arc;

use crate::ports::{CountryStatistic, RegionalStatistics, StatisticsService};

/// Shown to the user when the fallback source was used.
pub const FALLBACK_NOTICE: &str = "Failed to fetch global statistics. Using sample data instead.";

/// Query for global and regional statistics.
#[derive(Debug, Clone, Default)]
pub struct GetGlobalStatisticsQuery;

/// Statistics ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsView {
    pub global: Vec<CountryStatistic>,
    pub regional: RegionalStatistics,
    /// Name of the source that produced the figures.
    pub source: String,
    pub fallback_used: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

/// Handler for the statistics view.
pub struct GetGlobalStatisticsHandler {
    primary: Arc<dyn StatisticsService>,
    fallback: Arc<dyn StatisticsService>,
}

impl GetGlobalStatisticsHandler {
    pub fn new(primary: Arc<dyn StatisticsService>, fallback: Arc<dyn StatisticsService>) -> Self {
        Self { primary, fallback }
    }

    pub async fn handle(&self, _query: GetGlobalStatisticsQuery) -> StatisticsView {
        let (global, regional) = futures::join!(
            self.primary.fetch_global_stats(),
            self.primary.fetch_regional_stats()
        );

        let error = match (global, regional) {
            (Ok(global), Ok(regional)) => {
                return StatisticsView {
                    global,
                    regional,
                    source: self.primary.source_name().to_string(),
                    fallback_used: false,
                    notice: None,
                };
            }
            (Err(e), _) | (_, Err(e)) => e,
        };

        tracing::warn!(
            primary = self.primary.source_name(),
            fallback = self.fallback.source_name(),
            error = %error,
            "Statistics source failed, using fallback"
        );

        let (global, regional) = futures::join!(
            self.fallback.fetch_global_stats(),
            self.fallback.fetch_regional_stats()
        );

        StatisticsView {
            global: global.unwrap_or_else(|e| {
                tracing::error!(error = %e, "Fallback global statistics failed");
                Vec::new()
            }),
            regional: regional.unwrap_or_else(|e| {
                tracing::error!(error = %e, "Fallback regional statistics failed");
                RegionalStatistics::new()
            }),
            source: self.fallback.source_name().to_string(),
            fallback_used: true,
            notice: Some(FALLBACK_NOTICE.to_string()),
        }
    }
}
