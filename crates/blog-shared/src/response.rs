//! Standardized API response bodies.

use serde::{Deserialize, Serialize};

/// `{"message": ...}` body used for confirmations and liveness.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Error body. Every failure on the API is reported as `{"message": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// A human-readable explanation of the failure.
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    // Common error constructors
    pub fn bad_request(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    pub fn not_found(detail: impl Into<String>) -> Self {
        Self::new(detail)
    }

    /// Generic 500 body; never carries the underlying cause.
    pub fn internal_error() -> Self {
        Self::new("Server error")
    }
}
