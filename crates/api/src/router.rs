//! Shared application router builder.
//!
//! Provides [`build_app_router`] so both the production binary (`main.rs`)
//! and integration tests (`tests/common/mod.rs`) use the exact same
//! middleware stack.
//!
//! The admin surface (auth + `/properties`) and the public surface
//! (`/public/properties`) are separate subtrees with separate CORS
//! policies: admin origins get full-method access with credentials,
//! public origins get GET only.

use std::time::Duration;

use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::{HeaderName, Method, StatusCode};
use axum::Router;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::config::ServerConfig;
use crate::routes;
use crate::state::AppState;

/// Build the full application [`Router`] with all middleware layers.
///
/// The middleware stack is applied bottom-up:
///
/// 1. Per-subtree CORS (admin vs public)
/// 2. Set request ID on incoming requests
/// 3. Structured request/response tracing
/// 4. Propagate request ID to response
/// 5. Request timeout
/// 6. Panic recovery (catch panics, return 500)
pub fn build_app_router(state: AppState, config: &ServerConfig) -> Router {
    let request_id_header = HeaderName::from_static("x-request-id");

    let admin_routes = Router::new()
        .merge(routes::auth::router())
        .nest("/properties", routes::property::router())
        .layer(build_admin_cors_layer(config));

    let public_routes = Router::new()
        .nest("/public", routes::property::public_router())
        .layer(build_public_cors_layer(config));

    Router::new()
        .merge(routes::health::router())
        .merge(admin_routes)
        .merge(public_routes)
        // -- Middleware stack (applied bottom-up) --
        // Panic recovery: catch panics and return 500 JSON.
        .layer(CatchPanicLayer::new())
        // Request timeout.
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(config.request_timeout_secs),
        ))
        // Propagate request ID to response.
        .layer(PropagateRequestIdLayer::new(request_id_header.clone()))
        // Structured request/response tracing.
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Set request ID on incoming requests.
        .layer(SetRequestIdLayer::new(request_id_header, MakeRequestUuid))
        // Shared state.
        .with_state(state)
}

/// CORS for the admin surface: configured origins, full methods,
/// credentials allowed.
///
/// Panics at startup if any configured origin is invalid, which is the
/// desired behaviour -- we want misconfiguration to fail fast.
pub fn build_admin_cors_layer(config: &ServerConfig) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(parse_origins(&config.admin_cors_origins))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([CONTENT_TYPE, AUTHORIZATION])
        .allow_credentials(true)
        .max_age(Duration::from_secs(3600))
}

/// CORS for the public surface: GET only, no credentials. With no
/// configured public origins, any origin may read.
pub fn build_public_cors_layer(config: &ServerConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET])
        .allow_headers([CONTENT_TYPE])
        .max_age(Duration::from_secs(3600));

    if config.public_cors_origins.is_empty() {
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(parse_origins(&config.public_cors_origins))
    }
}

fn parse_origins(origins: &[String]) -> Vec<axum::http::HeaderValue> {
    origins
        .iter()
        .map(|o| {
            o.parse()
                .unwrap_or_else(|e| panic!("Invalid CORS origin '{o}': {e}"))
        })
        .collect()
}
