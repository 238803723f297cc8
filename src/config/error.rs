//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Invalid port number")]
    InvalidPort,

    #[error("Invalid request timeout")]
    InvalidTimeout,

    #[error("Invalid bind address: {0}")]
    InvalidBindAddress(String),

    #[error("Invalid statistics base URL: {0}")]
    InvalidStatisticsUrl(String),

    #[error("Statistics indicator must not be empty")]
    MissingIndicator,

    #[error("Invalid statistics timeout")]
    InvalidStatisticsTimeout,

    #[error("Statistics row limits must be positive")]
    InvalidRowLimit,
}
