//! Handlers for the access gate (login, token verification).

use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::{Deserialize, Serialize};

use haven_core::error::CoreError;

use crate::auth::jwt::{generate_access_token, validate_token};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

/// Successful login response.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Token lifetime in seconds.
    pub expires_in: i64,
}

/// Response payload for `GET /verify`.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub valid: bool,
    pub role: Option<String>,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /login
///
/// Authenticate with the shared admin password. Returns a bearer token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let password_valid = verify_password(&input.password, &state.config.admin_password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            "Invalid password".into(),
        )));
    }

    let token = generate_access_token(&state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    Ok(Json(LoginResponse {
        token,
        expires_in: state.config.jwt.expiry_mins * 60,
    }))
}

/// GET /verify
///
/// Report whether the presented bearer token is valid. Always 200: any
/// parse/signature/expiry failure yields `{valid: false}` rather than an
/// error status, so the endpoint fails closed without throwing.
pub async fn verify(State(state): State<AppState>, headers: HeaderMap) -> Json<VerifyResponse> {
    let claims = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .and_then(|token| validate_token(token, &state.config.jwt).ok());

    match claims {
        Some(claims) => Json(VerifyResponse {
            valid: true,
            role: Some(claims.role),
        }),
        None => Json(VerifyResponse {
            valid: false,
            role: None,
        }),
    }
}
