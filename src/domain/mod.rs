//! Domain layer containing the prediction logic and its types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared primitives (errors, rounding)
//! - `profile` - The user profile and its categorical levels
//! - `classification` - Body-mass category and age bracket
//! - `reference` - Immutable baseline and multiplier tables
//! - `scoring` - Lifespan prediction
//! - `analysis` - Factors, recommendations, risk level, country comparison

pub mod analysis;
pub mod classification;
pub mod foundation;
pub mod profile;
pub mod reference;
pub mod scoring;
