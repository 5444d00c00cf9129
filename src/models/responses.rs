use serde::{Deserialize, Serialize};

/// Error response body
///
/// The API surfaces exactly two messages: "Missing required fields" for
/// client input errors and "Something went wrong" for everything else.
/// Internal error detail stays in the server logs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn missing_fields() -> Self {
        Self {
            error: "Missing required fields".to_string(),
        }
    }

    pub fn internal() -> Self {
        Self {
            error: "Something went wrong".to_string(),
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}
