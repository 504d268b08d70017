//! # REST API Interface Layer
//!
//! One router per resource, merged under `/api` by `create_router`.
//! Handlers log the request, map the body onto a domain command, and
//! translate `DomainError` into a status code with an `{"error": ...}` body.

pub mod category_apis;
pub mod mappers;
pub mod restaurant_apis;
pub mod spin_apis;
pub mod stats_apis;
pub mod theme_apis;
pub mod transfer_apis;

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use shared::ErrorResponse;
use tracing::warn;

use crate::domain::DomainError;

/// Translate a domain error into an HTTP response.
/// Store failures are reported generically; details stay in the log.
pub fn error_response(error: DomainError) -> Response {
    let (status, message) = match &error {
        DomainError::Validation(message) => (StatusCode::BAD_REQUEST, message.clone()),
        DomainError::NotFound(message) => (StatusCode::NOT_FOUND, message.clone()),
        DomainError::ImportFailed(_) => (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()),
        DomainError::Database(_) | DomainError::Internal(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error".to_string(),
        ),
    };
    (status, Json(ErrorResponse { error: message })).into_response()
}

/// Malformed, non-JSON or wrongly-typed bodies are all a 400
pub fn rejection_response(rejection: JsonRejection) -> Response {
    warn!("Rejected request body: {}", rejection.body_text());
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: "Invalid payload".to_string(),
        }),
    )
        .into_response()
}
