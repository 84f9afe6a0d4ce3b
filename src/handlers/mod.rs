//! HTTP request handlers (route handlers).
//!
//! Each handler is an async function that:
//! 1. Receives HTTP request data (JSON body, authenticated user)
//! 2. Calls the store
//! 3. Returns a JSON response through [`crate::response`]

/// Readiness check and fallbacks
pub mod health;
/// Static landing page
pub mod index;
/// Note endpoints
pub mod notes;
/// User endpoints
pub mod users;
