//! HTTP-level tests for the access gate: login, verify, and bearer
//! enforcement on the admin routes.
//!
//! None of these paths touch the database, so they run against a lazy
//! pool with no live PostgreSQL.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, login, post_json, TEST_PASSWORD};

/// Successful login returns a token and its lifetime.
#[tokio::test]
async fn login_success() {
    let app = common::build_test_app(common::lazy_pool());

    let response = post_json(
        app,
        "/login",
        serde_json::json!({ "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["token"].is_string(), "response must contain a token");
    assert!(json["expires_in"].is_number());
}

/// Login with the wrong password returns 401 and no token.
#[tokio::test]
async fn login_wrong_password() {
    let app = common::build_test_app(common::lazy_pool());

    let response = post_json(
        app,
        "/login",
        serde_json::json!({ "password": "not-the-password" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert!(json["error"].is_string());
    assert!(json.get("token").is_none());
}

/// A freshly issued token verifies as valid with the admin role.
#[tokio::test]
async fn verify_valid_token() {
    let app = common::build_test_app(common::lazy_pool());
    let token = login(app.clone()).await;

    let response = get_auth(app, "/verify", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["valid"], true);
    assert_eq!(json["role"], "admin");
}

/// Verification fails closed: garbage or missing tokens produce
/// `{valid: false}` with status 200, never an error.
#[tokio::test]
async fn verify_fails_closed() {
    let app = common::build_test_app(common::lazy_pool());

    let response = get(app.clone(), "/verify").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["valid"], false);
    assert_eq!(json["role"], serde_json::Value::Null);

    let response = get_auth(app, "/verify", "garbage.not.a-token").await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["valid"], false);
}

/// Admin routes reject requests without a bearer token.
#[tokio::test]
async fn admin_routes_require_auth() {
    let app = common::build_test_app(common::lazy_pool());

    let response = get(app, "/properties").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// Admin routes reject tampered tokens.
#[tokio::test]
async fn admin_routes_reject_bad_token() {
    let app = common::build_test_app(common::lazy_pool());

    let response = get_auth(app, "/properties", "definitely-forged").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

/// A token signed with a different secret is rejected.
#[tokio::test]
async fn admin_routes_reject_foreign_token() {
    let app = common::build_test_app(common::lazy_pool());

    let foreign = haven_api::auth::jwt::generate_access_token(&haven_api::auth::jwt::JwtConfig {
        secret: "some-other-secret".to_string(),
        expiry_mins: 60,
    })
    .unwrap();

    let response = get_auth(app, "/properties", &foreign).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
