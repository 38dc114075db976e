pub mod auth;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth            POST login, GET whoami, OPTIONS preflight (public)
/// /auth/refresh    POST refresh, OPTIONS preflight (requires token)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(auth::router())
}
