//! HTTP routes for statistics endpoints.

use axum::{routing::get, Router};

use super::handlers::{get_statistics, StatisticsHandlers};

/// Creates the statistics router.
pub fn statistics_routes(handlers: StatisticsHandlers) -> Router {
    Router::new()
        .route("/statistics", get(get_statistics))
        .with_state(handlers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::statistics::SampleStatistics;
    use crate::application::handlers::{GetGlobalStatisticsHandler, FALLBACK_NOTICE};
    use crate::ports::{CountryStatistic, RegionalStatistics, StatisticsError, StatisticsService};
    use async_trait::async_trait;
    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
    };
    use serde_json::Value;
    use std::sync::Arc;
    use tower::ServiceExt;

    struct UnreachableStatistics;

    #[async_trait]
    impl StatisticsService for UnreachableStatistics {
        async fn fetch_global_stats(&self) -> Result<Vec<CountryStatistic>, StatisticsError> {
            Err(StatisticsError::network("connection refused"))
        }

        async fn fetch_regional_stats(&self) -> Result<RegionalStatistics, StatisticsError> {
            Err(StatisticsError::network("connection refused"))
        }

        fn source_name(&self) -> &'static str {
            "unreachable"
        }
    }

    async fn get_statistics_body(primary: Arc<dyn StatisticsService>) -> (StatusCode, Value) {
        let handler = GetGlobalStatisticsHandler::new(primary, Arc::new(SampleStatistics::new()));
        let app = statistics_routes(StatisticsHandlers::new(Arc::new(handler)));

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/statistics")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn statistics_from_primary() {
        let (status, body) = get_statistics_body(Arc::new(SampleStatistics::new())).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallbackUsed"], false);
        assert_eq!(body["global"].as_array().unwrap().len(), 10);
        assert_eq!(body["regional"]["Africa"]["count"], 47);
    }

    #[tokio::test]
    async fn statistics_fall_back_when_primary_fails() {
        let (status, body) = get_statistics_body(Arc::new(UnreachableStatistics)).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["fallbackUsed"], true);
        assert_eq!(body["source"], "sample");
        assert_eq!(body["notice"], FALLBACK_NOTICE);
        assert_eq!(body["global"][0]["country"], "Japan");
    }
}
