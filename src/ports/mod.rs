//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `StatisticsService` - aggregate life expectancy data for display

mod statistics_service;

pub use statistics_service::{
    CountryStatistic, RegionalStatistic, RegionalStatistics, StatisticsError, StatisticsService,
};
