//! Readiness check and router fallbacks.

use axum::{http::StatusCode, response::Response};
use serde::Serialize;

use crate::response::{write_error, write_json};

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
}

/// Readiness handler.
///
/// # Endpoint
///
/// `GET /v1/ready`
///
/// # Response (200 OK)
///
/// ```json
/// { "status": "ok" }
/// ```
pub async fn readiness() -> Response {
    write_json(StatusCode::OK, &ReadinessResponse { status: "ok" })
}

/// Fallback for paths no route matches.
pub async fn not_found() -> Response {
    write_error(StatusCode::NOT_FOUND, "Not Found")
}

/// Fallback for a known path requested with an unsupported method.
pub async fn method_not_allowed() -> Response {
    write_error(StatusCode::METHOD_NOT_ALLOWED, "Method Not Allowed")
}
