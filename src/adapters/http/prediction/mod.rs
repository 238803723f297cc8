//! HTTP adapter for prediction and country catalogue endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{CountryResponse, DiseaseRequest, PredictionRequest, PredictionResponse};
pub use handlers::PredictionHandlers;
pub use routes::prediction_routes;
