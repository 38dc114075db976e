//! JWT access-token issuance, validation, and claim extraction.
//!
//! Access tokens are HS256-signed JWTs binding an identity string (the
//! user's email) to a [`UserClaims`] payload. Verification is stateless:
//! there is no revocation list, so possession of an unexpired token is
//! authorization. The `jti` claim exists for audit trails only.

use gatehouse_core::types::DbId;
use gatehouse_db::models::user::User;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Non-secret user attributes embedded in every access token.
///
/// This is a fixed-shape record, not an open map: the type has no password
/// field, so a token payload cannot leak the stored hash by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserClaims {
    /// The user's internal database id.
    pub id: DbId,
    pub email: String,
    pub name: String,
    pub phone: Option<String>,
    /// Admin flag, embedded verbatim; enforcement is out of scope here.
    pub admin: bool,
}

impl From<&User> for UserClaims {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            phone: user.phone.clone(),
            admin: user.is_admin,
        }
    }
}

/// Full JWT payload: registered claims plus the flattened [`UserClaims`].
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the identity string the token was issued for (the email).
    pub sub: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
    #[serde(flatten)]
    pub user: UserClaims,
}

/// Token verification failure taxonomy.
///
/// Both variants surface externally as 401; the distinction exists for
/// logging and tests.
#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    /// Bad signature, malformed token, or wrong algorithm.
    #[error("invalid token")]
    Invalid,
    /// Signature is fine but the expiry has passed.
    #[error("token expired")]
    Expired,
}

impl From<jsonwebtoken::errors::Error> for TokenError {
    fn from(err: jsonwebtoken::errors::Error) -> Self {
        match err.kind() {
            jsonwebtoken::errors::ErrorKind::ExpiredSignature => TokenError::Expired,
            _ => TokenError::Invalid,
        }
    }
}

/// Configuration for token issuance and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Access token lifetime in minutes (default: 15).
    pub access_token_expiry_mins: i64,
}

/// Default access token expiry in minutes.
const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var                   | Required | Default |
    /// |---------------------------|----------|---------|
    /// | `JWT_SECRET`              | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`  | no       | `15`    |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let access_token_expiry_mins: i64 = std::env::var("JWT_ACCESS_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_ACCESS_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_ACCESS_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            access_token_expiry_mins,
        }
    }
}

/// Issue an HS256 access token binding `identity` to the given claims.
///
/// The expiry horizon is fixed by configuration; `iat`, `exp`, and `jti`
/// are computed fresh on every call.
pub fn generate_access_token(
    identity: &str,
    user: &UserClaims,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.access_token_expiry_mins * 60;

    let claims = Claims {
        sub: identity.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
        user: user.clone(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Checks the signature first, then the expiry. Fails with
/// [`TokenError::Expired`] past the horizon and [`TokenError::Invalid`]
/// for every other defect.
pub fn validate_token(token: &str, config: &JwtConfig) -> Result<Claims, TokenError> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}

/// Convenience accessor: [`validate_token`] followed by projecting the
/// user-claims portion of the payload.
pub fn extract_claims(token: &str, config: &JwtConfig) -> Result<UserClaims, TokenError> {
    Ok(validate_token(token, config)?.user)
}
