use std::sync::Arc;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
/// Nothing here mutates after startup; the pool synchronizes itself.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: gatehouse_db::DbPool,
    /// Server configuration, including the JWT signing config.
    pub config: Arc<ServerConfig>,
}
