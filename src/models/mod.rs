//! Data models representing database entities.
//!
//! Row types double as API response bodies: every column is part of the
//! public JSON shape.

/// Note model
pub mod note;
/// User (principal) model
pub mod user;
