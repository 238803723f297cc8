//! Statistics handlers.

mod get_global_statistics;

pub use get_global_statistics::{
    GetGlobalStatisticsHandler, GetGlobalStatisticsQuery, StatisticsView, FALLBACK_NOTICE,
};
