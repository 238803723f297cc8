//! Command and query handlers.
//!
//! - `prediction` - score a profile and explain the result
//! - `statistics` - global and regional figures with sample fallback

pub mod prediction;
pub mod statistics;

pub use prediction::{
    PredictLifeExpectancyCommand, PredictLifeExpectancyHandler, PredictLifeExpectancyResult,
};
pub use statistics::{
    GetGlobalStatisticsHandler, GetGlobalStatisticsQuery, StatisticsView, FALLBACK_NOTICE,
};
