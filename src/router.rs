//! Route table and outer middleware stack.

use std::time::Duration;

use axum::{
    BoxError, Router,
    error_handling::HandleErrorLayer,
    http::{HeaderValue, Method, StatusCode, header, request::Parts},
    middleware,
    response::Response,
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{
    auth::middleware::require_api_key,
    handlers::{health, index, notes, users},
    response::{log_write_faults, write_error},
    state::AppState,
};

/// Build the application router.
///
/// Without a state (no database configured) only `/` and `/v1/ready` are
/// served; the users and notes endpoints answer 404.
pub fn build_router(state: Option<AppState>, request_timeout: Duration) -> Router {
    let mut app = Router::new()
        .route("/", get(index::index))
        .route("/v1/ready", get(health::readiness));

    if let Some(state) = state {
        app = app.merge(api_routes(state));
    }

    let app = app
        .fallback(health::not_found)
        .method_not_allowed_fallback(health::method_not_allowed);

    with_transport_layers(app, request_timeout)
}

/// Write-fault logging, request tracing, the whole-request timeout and CORS,
/// applied to every route including the fallbacks.
fn with_transport_layers(app: Router, request_timeout: Duration) -> Router {
    app.layer(
        ServiceBuilder::new()
            .layer(middleware::from_fn(log_write_faults))
            .layer(TraceLayer::new_for_http())
            .layer(HandleErrorLayer::new(handle_timeout_error))
            .timeout(request_timeout),
    )
    .layer(cors_layer())
}

/// Users and notes endpoints.
///
/// Every handler that takes `Extension<User>` sits behind `require_api_key`;
/// `POST /v1/users` is the only public route here.
fn api_routes(state: AppState) -> Router {
    let auth = middleware::from_fn_with_state(state.resolver.clone(), require_api_key);

    Router::new()
        .route(
            "/v1/users",
            get(users::get_user)
                .route_layer(auth.clone())
                .post(users::create_user),
        )
        .route(
            "/v1/notes",
            get(notes::list_notes)
                .post(notes::create_note)
                .route_layer(auth),
        )
        .with_state(state)
}

/// Browser access from any http(s) origin, without credentials.
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            |origin: &HeaderValue, _parts: &Parts| {
                let origin = origin.as_bytes();
                origin.starts_with(b"https://") || origin.starts_with(b"http://")
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
        .expose_headers([header::LINK])
        .allow_credentials(false)
        .max_age(Duration::from_secs(300))
}

async fn handle_timeout_error(err: BoxError) -> Response {
    if err.is::<tower::timeout::error::Elapsed>() {
        return write_error(StatusCode::REQUEST_TIMEOUT, "Request Timeout");
    }

    tracing::error!(error = %err, "unhandled middleware error");
    write_error(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}
