//! Application error type mapping to HTTP status codes and envelope format.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use questa_types::error::BankError;

/// Application-level error that maps to HTTP responses.
#[derive(Debug)]
pub enum AppError {
    /// Bank loading and validation errors.
    Bank(BankError),
    /// The conversation has no live session.
    ConversationNotFound(String),
    /// Validation error.
    Validation(String),
    /// Generic internal error.
    Internal(String),
}

impl From<BankError> for AppError {
    fn from(e: BankError) -> Self {
        AppError::Bank(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Bank(BankError::NotFound(id)) => (
                StatusCode::NOT_FOUND,
                "CATEGORY_NOT_FOUND",
                format!("Category '{id}' not found"),
            ),
            AppError::Bank(e @ BankError::Malformed { .. }) => {
                (StatusCode::UNPROCESSABLE_ENTITY, "BANK_MALFORMED", e.to_string())
            }
            AppError::ConversationNotFound(id) => (
                StatusCode::NOT_FOUND,
                "CONVERSATION_NOT_FOUND",
                format!("Conversation '{id}' not found"),
            ),
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone())
            }
            AppError::Internal(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", msg.clone())
            }
        };

        let body = json!({
            "data": null,
            "meta": {
                "request_id": "",
                "timestamp": chrono::Utc::now().to_rfc3339(),
                "response_time_ms": 0
            },
            "errors": [{
                "code": code,
                "message": message,
            }]
        });

        (
            status,
            [(axum::http::header::CONTENT_TYPE, "application/json")],
            body.to_string(),
        )
            .into_response()
    }
}
