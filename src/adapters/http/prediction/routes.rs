//! HTTP routes for prediction endpoints.

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{get_country, list_countries, predict, PredictionHandlers};

/// Creates the prediction router with all endpoints.
pub fn prediction_routes(handlers: PredictionHandlers) -> Router {
    Router::new()
        .route("/predictions", post(predict))
        .route("/countries", get(list_countries))
        .route("/countries/:code", get(get_country))
        .with_state(handlers)
}
