//! HTTP handlers for prediction endpoints.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use crate::adapters::http::error::ErrorResponse;
use crate::application::handlers::{PredictLifeExpectancyCommand, PredictLifeExpectancyHandler};
use crate::domain::reference::{find_country, SUPPORTED_COUNTRIES};

use super::dto::{CountryResponse, PredictionRequest, PredictionResponse};

// ════════════════════════════════════════════════════════════════════════════
// Handler state
// ════════════════════════════════════════════════════════════════════════════

#[derive(Clone)]
pub struct PredictionHandlers {
    predict_handler: Arc<PredictLifeExpectancyHandler>,
}

impl PredictionHandlers {
    pub fn new(predict_handler: Arc<PredictLifeExpectancyHandler>) -> Self {
        Self { predict_handler }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// HTTP handlers
// ════════════════════════════════════════════════════════════════════════════

/// POST /api/predictions - Predict life expectancy for a profile
pub async fn predict(
    State(handlers): State<PredictionHandlers>,
    payload: Result<Json<PredictionRequest>, JsonRejection>,
) -> Response {
    let Json(req) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::malformed_body(&rejection)),
            )
                .into_response()
        }
    };

    let cmd = PredictLifeExpectancyCommand {
        profile: req.into(),
    };

    match handlers.predict_handler.handle(cmd) {
        Ok(result) => {
            let response = PredictionResponse::from(result);
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => (StatusCode::BAD_REQUEST, Json(ErrorResponse::validation(&e))).into_response(),
    }
}

/// GET /api/countries - List supported countries
pub async fn list_countries() -> Response {
    let countries: Vec<CountryResponse> = SUPPORTED_COUNTRIES.iter().map(Into::into).collect();
    (StatusCode::OK, Json(countries)).into_response()
}

/// GET /api/countries/:code - Look up one supported country
pub async fn get_country(Path(code): Path<String>) -> Response {
    match find_country(&code) {
        Some(country) => (StatusCode::OK, Json(CountryResponse::from(country))).into_response(),
        None => (
            StatusCode::NOT_FOUND,
            Json(ErrorResponse::not_found("Country", &code)),
        )
            .into_response(),
    }
}
