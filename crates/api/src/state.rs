use std::sync::Arc;

use haven_storage::ObjectStore;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: haven_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Object store for property images.
    pub store: Arc<dyn ObjectStore>,
}
