//! Notes API - Main Application Entry Point
//!
//! A small REST API for users and their notes. Users are created publicly and
//! receive an API key; every other users/notes endpoint requires
//! `Authorization: ApiKey <key>`.
//!
//! # Architecture
//!
//! - **Web Framework**: Axum (async HTTP server)
//! - **Database**: PostgreSQL with sqlx (async queries), optional
//! - **Authentication**: API key resolved to its owning user
//! - **Format**: JSON requests/responses, `{"error": ...}` for every failure
//!
//! # Startup Flow
//!
//! 1. Initialize logging
//! 2. Load configuration from environment variables
//! 3. If `DATABASE_URL` is set: create pool and run migrations
//! 4. Build HTTP router with routes and middleware
//! 5. Start server on configured port

mod auth;
mod config;
mod db;
mod error;
mod handlers;
mod models;
mod response;
mod router;
mod state;
mod store;
#[cfg(test)]
mod test_support;

use tracing_subscriber::EnvFilter;

use crate::{state::AppState, store::postgres::PgStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Reads RUST_LOG environment variable (defaults to "info" level)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = config::Config::from_env()?;
    tracing::info!("Configuration loaded");

    let state = match config.database_url() {
        Some(database_url) => {
            let pool = db::create_pool(database_url, config.database_max_connections).await?;
            tracing::info!("Connected to database");

            db::run_migrations(&pool).await?;
            tracing::info!("Database migrations complete");

            Some(AppState::postgres(PgStore::new(pool)))
        }
        None => {
            tracing::warn!("DATABASE_URL environment variable is not set");
            tracing::warn!("Running without CRUD endpoints");
            None
        }
    };

    let app = router::build_router(state, config.request_timeout());

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
