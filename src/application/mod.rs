//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Following CQRS, it separates command handlers from query handlers.

pub mod handlers;

pub use handlers::{
    GetGlobalStatisticsHandler, GetGlobalStatisticsQuery, PredictLifeExpectancyCommand,
    PredictLifeExpectancyHandler, PredictLifeExpectancyResult, StatisticsView,
};
