//! Route definitions for the access gate.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at the root level.
///
/// ```text
/// POST /login   -> login
/// GET  /verify  -> verify (always 200, payload signals validity)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/verify", get(auth::verify))
}
