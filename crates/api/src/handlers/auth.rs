//! Handlers for the `/auth` resource (login, logout, current admin).

use axum::extract::State;
use axum::http::header::SET_COOKIE;
use axum::response::IntoResponse;
use axum::Json;
use jennskin_core::error::CoreError;
use jennskin_db::models::admin_user::AdminUserInfo;
use jennskin_db::repositories::AdminUserRepo;
use serde::{Deserialize, Serialize};

use crate::auth::jwt::generate_token;
use crate::auth::password::{verify_password, DUMMY_PASSWORD_HASH};
use crate::auth::session::{removal_cookie, session_cookie};
use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

/// Same message for unknown usernames and wrong passwords.
const INVALID_CREDENTIALS: &str = "Invalid credentials";

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(INVALID_CREDENTIALS.into()))
}

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Login response. The token is also set as the session cookie.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub user: AdminUserInfo,
    pub token: String,
}

/// Response body for `GET /auth/me`.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: AdminUserInfo,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    AppJson(input): AppJson<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    let user = AdminUserRepo::find_by_username(&state.pool, &input.username).await?;

    // Unknown usernames still pay for one Argon2 verify.
    let stored_hash = user
        .as_ref()
        .map_or(DUMMY_PASSWORD_HASH, |u| u.password_hash.as_str());
    let password_valid = verify_password(&input.password, stored_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    let user = match user {
        Some(user) if password_valid => user,
        Some(user) => {
            tracing::debug!(user_id = user.id, reason = "wrong_password", "Login rejected");
            return Err(invalid_credentials());
        }
        None => {
            tracing::debug!(reason = "unknown_username", "Login rejected");
            return Err(invalid_credentials());
        }
    };

    let jwt = &state.config.jwt;
    let token = generate_token(user.id, &user.username, jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;
    let cookie = session_cookie(token.clone(), jwt.token_expiry_days, state.config.cookie_secure);

    tracing::info!(user_id = user.id, username = %user.username, "Admin logged in");

    Ok((
        [(SET_COOKIE, cookie.to_string())],
        Json(LoginResponse {
            user: AdminUserInfo::from(&user),
            token,
        }),
    ))
}

/// POST /api/auth/logout
///
/// Clears the session cookie. Tokens are stateless, so nothing is revoked
/// server-side.
pub async fn logout(State(state): State<AppState>) -> impl IntoResponse {
    let cookie = removal_cookie(state.config.cookie_secure);
    (
        [(SET_COOKIE, cookie.to_string())],
        Json(SuccessResponse::ok()),
    )
}

/// GET /api/auth/me
pub async fn me(auth: AuthUser, State(state): State<AppState>) -> AppResult<Json<MeResponse>> {
    // The account may have been removed out-of-band since the token was issued.
    let user = AdminUserRepo::find_by_id(&state.pool, auth.user_id)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized("Invalid or expired token".into())))?;

    Ok(Json(MeResponse {
        user: AdminUserInfo::from(&user),
    }))
}
