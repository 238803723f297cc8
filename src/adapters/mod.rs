//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the domain to external systems:
//! - `statistics` - WHO GHO client and the sample dataset
//! - `http` - REST API over axum

pub mod http;
pub mod statistics;

pub use statistics::{SampleStatistics, WhoGhoClient, WhoGhoConfig};
