//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use gatehouse_core::error::CoreError;

use crate::auth::jwt::{validate_token, UserClaims};
use crate::error::AppError;
use crate::state::AppState;

/// Verified identity and claims extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(identity = %user.identity, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Every token defect (absent header, malformed value, bad signature,
/// expiry) is rejected 401 before the handler runs.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The identity the token was issued for (from `claims.sub`).
    pub identity: String,
    /// The non-secret user claims embedded at issue time.
    pub claims: UserClaims,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            identity: claims.sub,
            claims: claims.user,
        })
    }
}
