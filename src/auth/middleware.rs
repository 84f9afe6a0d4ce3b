//! API key authentication middleware.
//!
//! This middleware intercepts every protected request to:
//! 1. Extract the API key from the Authorization header
//! 2. Resolve it to the owning user
//! 3. Inject the user into the request
//! 4. Reject unauthorized requests with HTTP 401

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{HeaderMap, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

use super::{AuthError, api_key::get_api_key};
use crate::{models::user::User, response::write_error, store::PrincipalResolver};

/// Body message for every authentication failure.
pub const UNAUTHORIZED_MESSAGE: &str = "Couldn't authenticate";

/// Resolve the request's API key to a user.
///
/// Stops at the first failure: the resolver is not consulted when the header
/// cannot be parsed.
pub async fn authenticate(
    resolver: &dyn PrincipalResolver,
    headers: &HeaderMap,
) -> Result<User, AuthError> {
    let api_key = get_api_key(headers)?;

    resolver
        .resolve(api_key)
        .await?
        .ok_or(AuthError::PrincipalNotFound)
}

/// Every variant collapses to the same 401 body so callers cannot tell a
/// missing header from an unknown key.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match &self {
            AuthError::Resolver(err) => {
                tracing::error!(error = %err, "rejecting request: principal lookup failed");
            }
            _ => tracing::debug!(reason = %self, "rejecting request"),
        }

        write_error(StatusCode::UNAUTHORIZED, UNAUTHORIZED_MESSAGE)
    }
}

/// Middleware guarding every protected route.
///
/// # Flow
///
/// 1. Parse `Authorization: ApiKey <key>`
/// 2. Look the key up through the injected resolver
/// 3. If found: insert the `User` into request extensions, call the next handler
/// 4. Otherwise: return 401 without calling the handler
///
/// Handlers behind this layer extract the principal with `Extension<User>`.
/// Their responses are returned untouched.
pub async fn require_api_key(
    State(resolver): State<Arc<dyn PrincipalResolver>>,
    mut request: Request,
    next: Next,
) -> Result<Response, AuthError> {
    let user = authenticate(resolver.as_ref(), request.headers()).await?;

    tracing::debug!(user_id = %user.id, "request authenticated");
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
