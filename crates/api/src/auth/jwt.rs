//! Session token generation and validation.
//!
//! Tokens are HS256-signed JWTs containing a [`Claims`] payload. They are
//! stateless: logout only clears the cookie, and a captured token stays
//! valid until `exp`.

use jennskin_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// JWT claims embedded in every session token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject -- the admin's internal database id.
    pub sub: DbId,
    /// The admin's username at the time of login.
    pub username: String,
    /// Expiration time (UTC Unix timestamp).
    pub exp: i64,
    /// Issued-at time (UTC Unix timestamp).
    pub iat: i64,
    /// Unique token identifier (UUID v4) for audit logging.
    pub jti: String,
}

/// Configuration for JWT token generation and validation.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC-SHA256 secret used to sign and verify tokens.
    pub secret: String,
    /// Session token lifetime in days (default: 7).
    pub token_expiry_days: i64,
}

/// Default session token expiry in days.
const DEFAULT_TOKEN_EXPIRY_DAYS: i64 = 7;

/// Length of the per-process secret generated when `JWT_SECRET` is unset.
const GENERATED_SECRET_LENGTH: usize = 64;

impl JwtConfig {
    /// Load JWT configuration from environment variables.
    ///
    /// | Env Var            | Required | Default              |
    /// |--------------------|----------|----------------------|
    /// | `JWT_SECRET`       | no       | random per process   |
    /// | `JWT_EXPIRY_DAYS`  | no       | `7`                  |
    ///
    /// Without `JWT_SECRET` every restart invalidates existing sessions.
    pub fn from_env() -> Self {
        let secret = match std::env::var("JWT_SECRET") {
            Ok(secret) if !secret.is_empty() => secret,
            _ => {
                tracing::warn!(
                    "JWT_SECRET not set; using a random secret, sessions will not survive a restart"
                );
                generate_secret()
            }
        };

        let token_expiry_days: i64 = std::env::var("JWT_EXPIRY_DAYS")
            .unwrap_or_else(|_| DEFAULT_TOKEN_EXPIRY_DAYS.to_string())
            .parse()
            .expect("JWT_EXPIRY_DAYS must be a valid i64");
        assert!(token_expiry_days > 0, "JWT_EXPIRY_DAYS must be positive");

        Self {
            secret,
            token_expiry_days,
        }
    }

    /// Token lifetime in seconds.
    pub fn token_expiry_secs(&self) -> i64 {
        self.token_expiry_days * 24 * 60 * 60
    }
}

fn generate_secret() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(GENERATED_SECRET_LENGTH)
        .map(char::from)
        .collect()
}

/// Generate an HS256 session token for the given admin.
pub fn generate_token(
    user_id: DbId,
    username: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = chrono::Utc::now().timestamp();
    let exp = now + config.token_expiry_secs();

    let claims = Claims {
        sub: user_id,
        username: username.to_string(),
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

/// Validate and decode a session token, returning the embedded [`Claims`].
///
/// Validates the signature and expiration. The error kind tells an expired
/// token (`ExpiredSignature`) apart from a forged or corrupted one.
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
