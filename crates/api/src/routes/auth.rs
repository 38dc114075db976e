//! Route definitions for the `/auth` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST    /auth          -> login
/// GET     /auth          -> whoami (requires token)
/// OPTIONS /auth          -> preflight
/// POST    /auth/refresh  -> refresh (requires token)
/// OPTIONS /auth/refresh  -> preflight
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/auth",
            post(auth::login).get(auth::whoami).options(auth::preflight),
        )
        .route(
            "/auth/refresh",
            post(auth::refresh).options(auth::preflight),
        )
}
