//! User HTTP handlers.
//!
//! - POST /v1/users - Create a user (public)
//! - GET /v1/users - Return the authenticated user

use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
};

use crate::{
    error::AppError,
    models::user::{CreateUserRequest, User},
    response::JsonResponse,
    state::AppState,
};

/// Create a new user.
///
/// # Endpoint
///
/// `POST /v1/users`
///
/// # Request Body
///
/// ```json
/// { "name": "Ada" }
/// ```
///
/// # Response
///
/// - **201 Created**: The stored user, including its generated `api_key`
/// - **400**: Body is not `{"name": string}`
/// - **500**: Store error
pub async fn create_user(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<JsonResponse<User>, AppError> {
    let Json(request) = payload?;

    let user = state
        .users
        .create_user(User::new(request.name))
        .await
        .map_err(AppError::CreateUser)?;

    tracing::info!(user_id = %user.id, "user created");
    Ok(JsonResponse(StatusCode::CREATED, user))
}

/// Return the authenticated user.
///
/// # Endpoint
///
/// `GET /v1/users`
///
/// # Authentication
///
/// Requires `Authorization: ApiKey <key>`; the user is injected by the auth
/// middleware.
pub async fn get_user(Extension(user): Extension<User>) -> JsonResponse<User> {
    JsonResponse(StatusCode::OK, user)
}
