//! Statistics adapters - Implementations of the StatisticsService port.
//!
//! - `WhoGhoClient` - live data from the WHO Global Health Observatory
//! - `SampleStatistics` - fixed offline dataset, also the fallback source

mod sample_statistics;
mod who_gho_client;

pub use sample_statistics::SampleStatistics;
pub use who_gho_client::{aggregate_regions, GhoObservation, WhoGhoClient, WhoGhoConfig, UNKNOWN_REGION};
