//! Parsing of the `Authorization: ApiKey <token>` header.

use axum::http::{HeaderMap, header::AUTHORIZATION};

/// The only scheme accepted in the `Authorization` header. Case-sensitive.
pub const API_KEY_SCHEME: &str = "ApiKey";

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ApiKeyError {
    #[error("no authorization header included")]
    MissingHeader,

    #[error("malformed authorization header")]
    MalformedHeader,

    #[error("unsupported authorization scheme")]
    UnsupportedScheme,
}

/// Extract the raw API key from request headers.
///
/// The header value must be exactly two whitespace-separated fields, the first
/// being [`API_KEY_SCHEME`]. The second field is returned verbatim. A value
/// with an empty token (`"ApiKey"` or `"ApiKey "`) has one field and is
/// therefore [`ApiKeyError::MalformedHeader`]. The value is read as UTF-8, so
/// non-ASCII tokens pass through; bytes that are not UTF-8 are malformed.
pub fn get_api_key(headers: &HeaderMap) -> Result<&str, ApiKeyError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(ApiKeyError::MissingHeader)?;
    let value = std::str::from_utf8(value.as_bytes()).map_err(|_| ApiKeyError::MalformedHeader)?;

    let mut fields = value.split_whitespace();
    let (Some(scheme), Some(token), None) = (fields.next(), fields.next(), fields.next()) else {
        return Err(ApiKeyError::MalformedHeader);
    };

    if scheme != API_KEY_SCHEME {
        return Err(ApiKeyError::UnsupportedScheme);
    }

    Ok(token)
}
