//! HTTP adapter for statistics endpoints.

mod handlers;
mod routes;

pub use handlers::StatisticsHandlers;
pub use routes::statistics_routes;
