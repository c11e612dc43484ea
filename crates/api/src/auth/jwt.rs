//! JWT access-token generation and validation.
//!
//! Tokens are HS256-signed JWTs carrying a [`Claims`] payload. There is a
//! single shared admin credential, so the subject is fixed; the `role`
//! claim is what the frontend inspects.

use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Subject claim for every token: the shared admin identity.
pub const ADMIN_SUBJECT: &str = "admin";

/// Role granted to the shared admin identity.
pub const ADMIN_ROLE: &str = "admin";

/// JWT claims embedded in every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- always the shared admin identity.
    pub sub: String,
    /// Role name (e.g. `"admin"`).
    pub role: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Token lifetime in minutes (default: 1440, i.e. 24 hours).
    pub expiry_mins: i64,
}

/// Default token expiry in minutes.
const DEFAULT_EXPIRY_MINS: i64 = 1440;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var           | Required | Default |
    /// |-------------------|----------|---------|
    /// | `JWT_SECRET`      | **yes**  | --      |
    /// | `JWT_EXPIRY_MINS` | no       | `1440`  |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is not set or is empty.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET must be set in the environment");
        assert!(!secret.is_empty(), "JWT_SECRET must not be empty");

        let expiry_mins: i64 = std::env::var("JWT_EXPIRY_MINS")
            .unwrap_or_else(|_| DEFAULT_EXPIRY_MINS.to_string())
            .parse()
            .expect("JWT_EXPIRY_MINS must be a valid i64");

        Self {
            secret,
            expiry_mins,
        }
    }
}

/// Generate an HS256 access token for the shared admin identity.
pub fn generate_access_token(config: &JwtConfig) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.expiry_mins * 60;

    let claims = Claims {
        sub: ADMIN_SUBJECT.to_string(),
        role: ADMIN_ROLE.to_string(),
        exp,
        iat: now,
        jti: Uuid::new_v4().to_string(),
    };

    encode(
        &Header::default(), // HS256
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Validate and decode an access token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration automatically. Any failure --
/// garbage input, wrong signature, expired token -- is an `Err`; callers
/// at the HTTP boundary translate that to 401 or `{valid: false}` and
/// never let it propagate as a 500.
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(), // HS256, validates exp
    )?;
    Ok(token_data.claims)
}
