//! Shared helpers for API integration tests.
//!
//! Builds the application router with the production middleware stack, an
//! in-memory object store, and a test configuration, and provides small
//! request/response helpers plus a multipart body builder.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use haven_api::auth::jwt::JwtConfig;
use haven_api::auth::password::hash_password;
use haven_api::config::ServerConfig;
use haven_api::router::build_app_router;
use haven_api::state::AppState;
use haven_db::repositories::ListOrder;
use haven_storage::MemoryObjectStore;

/// Shared admin password used by the test configuration.
pub const TEST_PASSWORD: &str = "test-admin-password-123";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        admin_cors_origins: vec!["http://localhost:5173".to_string()],
        public_cors_origins: vec![],
        request_timeout_secs: 30,
        list_order: ListOrder::Desc,
        jwt: JwtConfig {
            secret: "integration-test-secret-long-enough".to_string(),
            expiry_mins: 60,
        },
        admin_password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
    }
}

/// Build the full application router with all middleware layers, using
/// the given database pool and an in-memory object store.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        store: Arc::new(MemoryObjectStore::new()),
    };
    build_app_router(state, &config)
}

/// A pool that never actually connects. For tests exercising routes that
/// do not touch the database (auth, verify, rejection paths).
pub fn lazy_pool() -> PgPool {
    sqlx::postgres::PgPoolOptions::new()
        .connect_lazy("postgres://127.0.0.1:1/never-connected")
        .expect("lazy pool construction should succeed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn get(app: Router, path: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn get_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(path)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

/// Decode a response body as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).expect("response body must be valid JSON")
}

/// Log in with the test password and return the bearer token.
pub async fn login(app: Router) -> String {
    let response = post_json(
        app,
        "/login",
        serde_json::json!({ "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    json["token"].as_str().expect("login must return a token").to_string()
}

// ---------------------------------------------------------------------------
// Multipart bodies
// ---------------------------------------------------------------------------

const BOUNDARY: &str = "haven-test-boundary";

/// Incrementally builds a `multipart/form-data` body.
#[derive(Default)]
pub struct MultipartBuilder {
    body: Vec<u8>,
}

impl MultipartBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    pub fn file(mut self, name: &str, filename: &str, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: image/jpeg\r\n\r\n"
            )
            .as_bytes(),
        );
        self.body.extend_from_slice(bytes);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.body
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.body
    }

    /// Send this body to `path` with the given method and bearer token.
    pub async fn send(
        self,
        app: Router,
        method: Method,
        path: &str,
        token: &str,
    ) -> Response<Body> {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(
                header::CONTENT_TYPE,
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(self.finish()))
            .unwrap();
        app.oneshot(request).await.unwrap()
    }
}
