//! Note HTTP handlers.
//!
//! Both endpoints require authentication and only ever touch the
//! authenticated user's notes.

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    error::AppError,
    models::{
        note::{CreateNoteRequest, Note},
        user::User,
    },
    response::JsonResponse,
    state::AppState,
};

/// List the authenticated user's notes.
///
/// # Endpoint
///
/// `GET /v1/notes`
///
/// # Response
///
/// - **200 OK**: Array of notes, oldest first (may be empty)
/// - **500**: Store error
pub async fn list_notes(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
) -> Result<JsonResponse<Vec<Note>>, AppError> {
    let notes = state
        .notes
        .notes_for_user(user.id)
        .await
        .map_err(AppError::GetNotes)?;

    Ok(JsonResponse(StatusCode::OK, notes))
}

/// Create a note owned by the authenticated user.
///
/// # Endpoint
///
/// `POST /v1/notes`
///
/// # Request Body
///
/// ```json
/// { "note": "buy milk" }
/// ```
///
/// # Response
///
/// - **201 Created**: The stored note
/// - **400**: Body is not `{"note": string}`
/// - **500**: Store error
pub async fn create_note(
    State(state): State<AppState>,
    Extension(user): Extension<User>,
    payload: Result<Json<CreateNoteRequest>, JsonRejection>,
) -> Result<JsonResponse<Note>, AppError> {
    let Json(request) = payload?;

    let note = state
        .notes
        .create_note(Note::new(user.id, request.note))
        .await
        .map_err(AppError::CreateNote)?;

    Ok(JsonResponse(StatusCode::CREATED, note))
}
