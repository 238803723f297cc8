//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and numeric helpers shared by the
//! reference tables, the scoring engine and the analysis generator.

mod errors;
mod rounding;

pub use errors::{ErrorCode, ValidationError};
pub use rounding::round_to_tenth;
