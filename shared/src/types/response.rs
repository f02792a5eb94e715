//! API response envelope types
//!
//! The wire contract is deliberately flat: success responses carry
//! `{"success": true}` plus an optional human-readable message, error
//! responses carry a single `{"error": "..."}` field. The error text is
//! kept generic so a response never reveals whether an identity has a
//! pending code.

use serde::{Deserialize, Serialize};

/// Successful API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuccessResponse {
    /// Always `true`
    pub success: bool,

    /// Optional confirmation message
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl SuccessResponse {
    /// Create a bare `{"success": true}` response
    pub fn new() -> Self {
        Self {
            success: true,
            message: None,
        }
    }

    /// Create a success response with a confirmation message
    pub fn with_message(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: Some(message.into()),
        }
    }
}

impl Default for SuccessResponse {
    fn default() -> Self {
        Self::new()
    }
}

/// Error API response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Generic error description
    pub error: String,
}

impl ErrorResponse {
    /// Create an error response
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
