//! Error types for the thought feed API
//!
//! Provides unified error handling using thiserror.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::store::StoreError;

/// Body message for every 5xx response
const GENERIC_SERVER_ERROR: &str = "Internal Server Error";

// == App Error Enum ==
/// Unified error type for request handlers.
#[derive(Error, Debug)]
pub enum AppError {
    /// The authoritative store failed or timed out
    #[error(transparent)]
    StoreUnavailable(#[from] StoreError),

    /// No thought with the requested id
    #[error("Thought not found: {0}")]
    ThoughtNotFound(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),
}

impl AppError {
    /// Returns the HTTP status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::StoreUnavailable(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ThoughtNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::InvalidRequest(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
/// Renders `{"error": {"message": ...}}`. Store details are logged, never sent.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::StoreUnavailable(err) => {
                error!(error = %err, "request failed on store access");
                GENERIC_SERVER_ERROR.to_string()
            }
            AppError::ThoughtNotFound(_) => "Thought not found".to_string(),
            AppError::InvalidRequest(msg) => msg.clone(),
        };

        let body = Json(json!({
            "error": { "message": message }
        }));

        (self.status(), body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for handlers.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_error_status_codes() {
        let test_cases = vec![
            (
                AppError::StoreUnavailable(StoreError::Unavailable("down".to_string())),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::StoreUnavailable(StoreError::Timeout(Duration::from_secs(1))),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
            (
                AppError::ThoughtNotFound("abc".to_string()),
                StatusCode::NOT_FOUND,
            ),
            (
                AppError::InvalidRequest("bad".to_string()),
                StatusCode::BAD_REQUEST,
            ),
        ];

        for (error, expected_status) in test_cases {
            let response = error.into_response();
            assert_eq!(response.status(), expected_status);
        }
    }

    #[tokio::test]
    async fn test_store_error_body_is_generic() {
        let error = AppError::StoreUnavailable(StoreError::Unavailable(
            "mongodb://secret-host refused".to_string(),
        ));

        let response = error.into_response();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["error"]["message"], "Internal Server Error");
        assert!(!String::from_utf8_lossy(&bytes).contains("secret-host"));
    }
}
