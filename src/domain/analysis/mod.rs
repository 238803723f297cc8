//! Analysis Module - Pure explanation of a prediction.
//!
//! This module turns a profile and its prediction into the report shown to
//! the user.
//!
//! # Components
//!
//! - `AnalysisGenerator` - factor list, recommendations, country comparison
//! - `RiskLevel` - low/medium/high, a pure function of the factor count
//! - `AnalysisReport` - serializable result
//!
//! # Design Philosophy
//!
//! All functions are pure (no side effects) and stateless. No ports or
//! adapters are needed since there is no I/O.

mod generator;
mod report;

pub use generator::AnalysisGenerator;
pub use report::{
    AnalysisReport, CountryComparison, Factor, Impact, RiskLevel, HIGH_RISK_FACTOR_COUNT,
    MEDIUM_RISK_FACTOR_COUNT,
};
