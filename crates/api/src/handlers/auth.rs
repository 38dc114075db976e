//! Handlers for the `/auth` resource (login, claims query, refresh).

use axum::extract::State;
use axum::Json;
use gatehouse_core::email;
use gatehouse_core::error::CoreError;
use gatehouse_db::repositories::UserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::{generate_access_token, UserClaims};
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// The one rejection message for bad credentials. Unknown email and wrong
/// password MUST produce the same response so callers cannot enumerate
/// registered addresses.
const INVALID_CREDENTIALS: &str = "invalid email or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth`.
///
/// Fields are `Option` so a missing field is our 400, not the JSON
/// extractor's 422.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// Successful token response returned by login and refresh.
#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub status: &'static str,
    pub token: String,
}

/// Response body for `GET /auth`.
#[derive(Debug, Serialize)]
pub struct ClaimsResponse {
    pub claims: UserClaims,
}

/// Response body for CORS preflight requests.
#[derive(Debug, Serialize)]
pub struct PreflightResponse {
    #[serde(rename = "Status")]
    pub status: &'static str,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /v1/auth
///
/// Authenticate with email + password. Returns a signed access token whose
/// claims are the user's non-secret fields.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<TokenResponse>> {
    // 1. Both fields are required.
    let (email, password) = match (input.email, input.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(AppError::BadRequest(
                "email and password are required".into(),
            ))
        }
    };

    // 2. Syntactic email validation on the normalized form.
    let email = email::normalize(&email);
    if !email::is_valid(&email) {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email format!".into(),
        )));
    }

    // 3. Directory lookup. A miss is reported exactly like a bad password.
    let user = UserRepo::find_by_email(&state.pool, &email)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into())))?;

    let password_valid = verify_password(&password, &user.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(
            INVALID_CREDENTIALS.into(),
        )));
    }

    // 4. Issue a token for the user's claims (password hash excluded by type).
    let claims = UserClaims::from(&user);
    let token = generate_access_token(&user.email, &claims, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "Issued access token");

    Ok(Json(TokenResponse {
        status: "OK",
        token,
    }))
}

/// GET /v1/auth
///
/// Return the verified claims of the presented token.
pub async fn whoami(auth_user: AuthUser) -> Json<ClaimsResponse> {
    Json(ClaimsResponse {
        claims: auth_user.claims,
    })
}

/// POST /v1/auth/refresh
///
/// Re-issue a token for the already-verified identity and claims of the
/// presented token, with a fresh expiry. There is no directory re-lookup:
/// the refreshed token trusts the claims it was handed, so user-record
/// changes made since the original login are not picked up.
pub async fn refresh(
    State(state): State<AppState>,
    auth_user: AuthUser,
) -> AppResult<Json<TokenResponse>> {
    let token = generate_access_token(&auth_user.identity, &auth_user.claims, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation error: {e}")))?;

    tracing::info!(identity = %auth_user.identity, "Refreshed access token");

    Ok(Json(TokenResponse {
        status: "OK",
        token,
    }))
}

/// OPTIONS /v1/auth and /v1/auth/refresh
///
/// Plain-OPTIONS body for clients that probe without CORS preflight
/// headers; actual preflights are answered by the CORS layer.
pub async fn preflight() -> Json<PreflightResponse> {
    Json(PreflightResponse { status: "OK" })
}
