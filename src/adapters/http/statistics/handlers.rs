//! HTTP handlers for statistics endpoints.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::application::handlers::{GetGlobalStatisticsHandler, GetGlobalStatisticsQuery};

#[derive(Clone)]
pub struct StatisticsHandlers {
    get_statistics_handler: Arc<GetGlobalStatisticsHandler>,
}

impl StatisticsHandlers {
    pub fn new(get_statistics_handler: Arc<GetGlobalStatisticsHandler>) -> Self {
        Self {
            get_statistics_handler,
        }
    }
}

/// GET /api/statistics - Global and regional life expectancy
///
/// Always answers 200; a failed upstream is reported through `fallbackUsed`
/// and `notice`.
pub async fn get_statistics(State(handlers): State<StatisticsHandlers>) -> Response {
    let view = handlers
        .get_statistics_handler
        .handle(GetGlobalStatisticsQuery)
        .await;
    (StatusCode::OK, Json(view)).into_response()
}
