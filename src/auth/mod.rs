//! API key authentication.
//!
//! Protected requests must carry `Authorization: ApiKey <token>`. The token is
//! parsed by [`api_key::get_api_key`], resolved to a [`User`](crate::models::user::User)
//! by a [`PrincipalResolver`](crate::store::PrincipalResolver), and the user is
//! handed to the route handler through a request extension by
//! [`middleware::require_api_key`].

pub mod api_key;
pub mod middleware;

use crate::store::StoreError;
use api_key::ApiKeyError;

/// Why a request failed authentication.
///
/// The kinds are kept apart for logging only. Clients always see the same
/// 401 body, whatever the variant.
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error(transparent)]
    Credential(#[from] ApiKeyError),

    /// Well-formed key that no user owns.
    #[error("api key does not match any user")]
    PrincipalNotFound,

    /// The store could not answer the lookup.
    #[error("principal lookup failed: {0}")]
    Resolver(#[from] StoreError),
}
