//! Life Predictor - Life expectancy estimation service
//!
//! This crate predicts lifespan from a demographic, anthropometric and
//! lifestyle profile, explains the contributing risk factors, and serves
//! WHO life expectancy statistics for comparison.
//!
//! # Layout
//!
//! - [`domain`] - validation, reference tables, scoring, analysis
//! - [`ports`] - the statistics source interface
//! - [`adapters`] - WHO GHO client, sample data, axum HTTP API
//! - [`application`] - command and query handlers
//! - [`config`] - environment-driven settings

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
