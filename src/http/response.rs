//! Shared response helpers.
//!
//! Error responses leak no internal detail: clients see only the generic
//! bodies below, while the specifics go to the log.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Standard not-found response.
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, "404 page not found").into_response()
}

/// Generic internal-error response.
pub fn internal_server_error() -> Response {
    (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error").into_response()
}
