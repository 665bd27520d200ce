//! API error types with JSON responses.
//!
//! Every failure a handler can produce funnels through [`ApiError`], whose
//! `IntoResponse` impl is the single place store errors become status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use notes_store::StoreError;
use serde::Serialize;

/// Message returned for identifiers that fail the store's format check.
pub const MALFORMED_ID_MESSAGE: &str = "malformatted id";

/// API error that can be returned from handlers.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Bad request (400).
    #[error("{0}")]
    BadRequest(String),

    /// Unauthorized (401).
    #[error("{0}")]
    Unauthorized(String),

    /// Resource absent (404, empty body).
    #[error("resource not found")]
    NotFound,

    /// No route matched (404).
    #[error("unknown endpoint")]
    UnknownEndpoint,

    /// Internal server error (500).
    #[error("{0}")]
    Internal(String),

    /// Store error.
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl ApiError {
    /// Get the HTTP status code for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound | Self::UnknownEndpoint => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Store(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Self::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `error` field of the response body, or `None` for an empty body.
    pub fn client_message(&self) -> Option<String> {
        match self {
            Self::NotFound => None,
            Self::Store(StoreError::MalformedId { .. }) => Some(MALFORMED_ID_MESSAGE.to_string()),
            other => Some(other.to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

/// JSON error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "Request rejected");
        }

        match self.client_message() {
            Some(error) => (status, Json(ErrorResponse { error })).into_response(),
            None => status.into_response(),
        }
    }
}

/// Result type for API handlers.
pub type ApiResult<T> = Result<T, ApiError>;
