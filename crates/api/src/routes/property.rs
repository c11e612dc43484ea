//! Route definitions for the `/properties` resource.

use axum::extract::DefaultBodyLimit;
use axum::routing::get;
use axum::Router;

use crate::handlers::property;
use crate::state::AppState;

/// Maximum multipart body size for create/update (covers a cover image
/// plus a typical gallery batch).
const MAX_UPLOAD_BYTES: usize = 50 * 1024 * 1024;

/// Admin routes mounted at `/properties`. Handlers require a bearer token.
///
/// ```text
/// GET    /      -> list
/// POST   /      -> create (multipart)
/// GET    /{id}  -> get_by_id
/// PUT    /{id}  -> update (multipart)
/// DELETE /{id}  -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(property::list).post(property::create))
        .route(
            "/{id}",
            get(property::get_by_id)
                .put(property::update)
                .delete(property::delete),
        )
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
}

/// Public read-only routes mounted at `/public`. No auth; a separate
/// subtree so the GET-only CORS policy can apply.
///
/// ```text
/// GET /properties -> public_list
/// ```
pub fn public_router() -> Router<AppState> {
    Router::new().route("/properties", get(property::public_list))
}
