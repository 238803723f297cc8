//! HTTP adapters - REST API implementations.
//!
//! Each module has its own HTTP adapter for endpoint exposure. [`api_router`]
//! mounts them all under `/api` next to `/health` and applies the shared
//! tower layers.

pub mod error;
pub mod health;
pub mod prediction;
pub mod statistics;

use std::any::Any as PanicPayload;

use axum::{
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use http::{HeaderValue, Method, StatusCode};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::ServerConfig;

pub use error::ErrorResponse;
pub use prediction::{prediction_routes, PredictionHandlers};
pub use statistics::{statistics_routes, StatisticsHandlers};

/// Builds the complete application router.
pub fn api_router(
    prediction: PredictionHandlers,
    statistics: StatisticsHandlers,
    server: &ServerConfig,
) -> Router {
    let api = prediction_routes(prediction).merge(statistics_routes(statistics));

    with_layers(
        Router::new()
            .route("/health", get(health::health))
            .nest("/api", api),
        server,
    )
}

/// Applies panic recovery, request timeout, CORS and tracing.
fn with_layers(router: Router, server: &ServerConfig) -> Router {
    router
        .layer(CatchPanicLayer::custom(panic_response))
        .layer(TimeoutLayer::new(server.request_timeout()))
        .layer(cors_layer(server))
        .layer(TraceLayer::new_for_http())
}

/// A handler panic becomes a 500 with the standard error body.
fn panic_response(payload: Box<dyn PanicPayload + Send + 'static>) -> Response {
    let detail = payload
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| payload.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = %detail, "Request handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::internal("Internal server error")),
    )
        .into_response()
}

/// Allows any origin unless `cors_origins` lists specific ones.
fn cors_layer(server: &ServerConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = server
        .cors_origins_list()
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    let allow_origin = if origins.is_empty() {
        AllowOrigin::from(Any)
    } else {
        AllowOrigin::list(origins)
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(Any)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::statistics::SampleStatistics;
    use crate::application::handlers::{GetGlobalStatisticsHandler, PredictLifeExpectancyHandler};
    use crate::domain::reference::ReferenceData;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Request},
    };
    use std::sync::Arc;
    use tower::ServiceExt;

    fn app(server: &ServerConfig) -> Router {
        let sample = Arc::new(SampleStatistics::new());
        api_router(
            PredictionHandlers::new(Arc::new(PredictLifeExpectancyHandler::new(
                ReferenceData::shared(),
            ))),
            StatisticsHandlers::new(Arc::new(GetGlobalStatisticsHandler::new(
                sample.clone(),
                sample,
            ))),
            server,
        )
    }

    #[tokio::test]
    async fn health_is_mounted_at_root() {
        let response = app(&ServerConfig::default())
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn endpoints_are_nested_under_api() {
        let server = ServerConfig::default();
        for uri in ["/api/countries", "/api/statistics"] {
            let response = app(&server)
                .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "{}", uri);
        }

        let response = app(&server)
            .oneshot(Request::builder().uri("/countries").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn configured_cors_origin_is_echoed() {
        let server = ServerConfig {
            cors_origins: Some("http://localhost:5173".to_string()),
            ..Default::default()
        };
        let response = app(&server)
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header(header::ORIGIN, "http://localhost:5173")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(
            response.headers().get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&HeaderValue::from_static("http://localhost:5173"))
        );
    }

    #[tokio::test]
    async fn handler_panic_returns_internal_error() {
        async fn explode() -> &'static str {
            panic!("scoring invariant broken")
        }
        let router = with_layers(
            Router::new().route("/explode", get(explode)),
            &ServerConfig::default(),
        );

        let response = router
            .oneshot(Request::builder().uri("/explode").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.code, "INTERNAL_ERROR");
        assert_eq!(body.message, "Internal server error");
    }
}
