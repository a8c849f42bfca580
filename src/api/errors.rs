//! API Error Handling
//!
//! Maps the error taxonomy onto HTTP responses. Every failure is a JSON
//! body with an `error` field, paired with the same CORS headers as
//! successes, so browser-based callers can read it.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;

use crate::api::cors_headers;
use crate::metadata::MetadataError;
use crate::transaction::TransactionError;

/// Terminal request failure. No retries: a pure-transform service reports
/// the first failure immediately and no request affects any other.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Malformed descriptor. A config/programming error, not a client error.
    #[error("failed to create metadata: {0}")]
    Metadata(#[from] MetadataError),
    /// The `message` query parameter was missing or empty.
    #[error("message parameter is required")]
    MissingParameter,
    #[error(transparent)]
    Transaction(#[from] TransactionError),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingParameter => StatusCode::BAD_REQUEST,
            ApiError::Metadata(_) | ApiError::Transaction(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Body text exposed to clients. Internal details stay in the logs.
    fn public_message(&self) -> &'static str {
        match self {
            ApiError::Metadata(_) => "Failed to create metadata",
            ApiError::MissingParameter => "Message parameter is required",
            ApiError::Transaction(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!("request failed: {self}");
        }

        (
            status,
            cors_headers(),
            Json(json!({ "error": self.public_message() })),
        )
            .into_response()
    }
}
