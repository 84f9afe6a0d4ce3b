//! Error types and HTTP error response handling.
//!
//! This module defines the errors route handlers can return and how they are
//! converted into HTTP responses. Authentication failures have their own type,
//! [`AuthError`](crate::auth::AuthError), since they never reach a handler.

use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{response::write_error, store::StoreError};

/// Application-wide handler error type.
///
/// Each variant maps to a status code and a fixed client message. Underlying
/// causes are logged, never sent to the client.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body could not be decoded into the expected shape.
    ///
    /// Returns HTTP 400 Bad Request.
    #[error("Couldn't decode parameters")]
    InvalidRequest(#[from] JsonRejection),

    /// Creating a user failed in the store.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Couldn't create user")]
    CreateUser(#[source] StoreError),

    /// Creating a note failed in the store.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Couldn't create note")]
    CreateNote(#[source] StoreError),

    /// Listing notes failed in the store.
    ///
    /// Returns HTTP 500 Internal Server Error.
    #[error("Couldn't get notes")]
    GetNotes(#[source] StoreError),
}

/// Convert AppError into an HTTP response.
///
/// All errors use the `{"error": "<message>"}` envelope written by
/// [`write_error`], which also logs the 5xx variants.
///
/// # Status Code Mapping
///
/// - `InvalidRequest` → 400 Bad Request
/// - `CreateUser`, `CreateNote`, `GetNotes` → 500 Internal Server Error
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidRequest(rejection) => {
                tracing::debug!(reason = %rejection.body_text(), "rejecting request body");
                StatusCode::BAD_REQUEST
            }
            AppError::CreateUser(err) | AppError::CreateNote(err) | AppError::GetNotes(err) => {
                tracing::error!(error = %err, "store operation failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        write_error(status, &self.to_string())
    }
}
