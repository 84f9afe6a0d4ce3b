//! Application configuration management.
//!
//! This module handles loading configuration from environment variables.
//! It uses the `envy` crate to deserialize environment variables into a type-safe struct.

use std::time::Duration;

use serde::Deserialize;

/// Application configuration loaded from environment variables.
///
/// # Environment Variables
///
/// - `PORT` (required): HTTP server port
/// - `DATABASE_URL` (optional): PostgreSQL connection string. Without it the
///   server starts with only the static page and readiness check.
/// - `REQUEST_TIMEOUT_SECS` (optional): whole-request timeout, defaults to 15
/// - `DATABASE_MAX_CONNECTIONS` (optional): pool size, defaults to 5
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub port: u16,

    #[serde(default)]
    pub database_url: Option<String>,

    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,

    #[serde(default = "default_database_max_connections")]
    pub database_max_connections: u32,
}

fn default_request_timeout_secs() -> u64 {
    15
}

fn default_database_max_connections() -> u32 {
    5
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A `.env` file is loaded first if present. An unreadable `.env` is only
    /// a warning; the process environment is used as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `PORT` is missing
    /// - A value cannot be parsed into its expected type
    pub fn from_env() -> Result<Self, envy::Error> {
        if let Err(err) = dotenvy::dotenv() {
            tracing::warn!("assuming default configuration, .env unreadable: {}", err);
        }

        // Field names are converted automatically: database_url -> DATABASE_URL
        envy::from_env::<Config>()
    }

    /// Database URL, treating an empty value as unset.
    pub fn database_url(&self) -> Option<&str> {
        self.database_url.as_deref().filter(|url| !url.is_empty())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(vars: &[(&str, &str)]) -> Result<Config, envy::Error> {
        envy::from_iter(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string())),
        )
    }

    #[test]
    fn port_is_required() {
        assert!(parse(&[]).is_err());
    }

    #[test]
    fn defaults_apply() {
        let config = parse(&[("PORT", "8080")]).unwrap();

        assert_eq!(config.port, 8080);
        assert_eq!(config.database_url(), None);
        assert_eq!(config.request_timeout(), Duration::from_secs(15));
        assert_eq!(config.database_max_connections, 5);
    }

    #[test]
    fn empty_database_url_counts_as_unset() {
        let config = parse(&[("PORT", "8080"), ("DATABASE_URL", "")]).unwrap();
        assert_eq!(config.database_url(), None);
    }

    #[test]
    fn reads_all_fields() {
        let config = parse(&[
            ("PORT", "9000"),
            ("DATABASE_URL", "postgres://localhost/notes"),
            ("REQUEST_TIMEOUT_SECS", "3"),
            ("DATABASE_MAX_CONNECTIONS", "12"),
        ])
        .unwrap();

        assert_eq!(config.database_url(), Some("postgres://localhost/notes"));
        assert_eq!(config.request_timeout(), Duration::from_secs(3));
        assert_eq!(config.database_max_connections, 12);
    }

    #[test]
    fn invalid_port_is_rejected() {
        assert!(parse(&[("PORT", "not-a-port")]).is_err());
    }
}
