//! Error body shared by all endpoints.
//!
//! Handlers pair each body with its status code at the call site.

use axum::extract::rejection::JsonRejection;
use serde::{Deserialize, Serialize};

use crate::domain::foundation::{ErrorCode, ValidationError};

/// Standard error response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ErrorResponse {
    pub fn not_found(resource_type: &str, id: &str) -> Self {
        Self {
            code: ErrorCode::NotFound.to_string(),
            message: format!("{} not found: {}", resource_type, id),
            details: None,
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::InternalError.to_string(),
            message: message.into(),
            details: None,
        }
    }

    /// Profile validation failure; `details.field` names the offending input.
    pub fn validation(err: &ValidationError) -> Self {
        Self {
            code: err.code().to_string(),
            message: err.to_string(),
            details: Some(serde_json::json!({ "field": err.field() })),
        }
    }

    /// Body could not be parsed as the expected JSON shape.
    pub fn malformed_body(rejection: &JsonRejection) -> Self {
        Self {
            code: ErrorCode::ValidationFailed.to_string(),
            message: rejection.body_text(),
            details: None,
        }
    }
}
