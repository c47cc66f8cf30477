//! Session authentication extractor for the admin-only handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use jennskin_core::error::CoreError;
use jennskin_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::auth::session::extract_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated admin, taken from the session cookie or a Bearer token.
///
/// Adding this as a handler parameter is what makes a route admin-only:
///
/// ```ignore
/// async fn delete_thing(admin: AuthUser) -> AppResult<StatusCode> {
///     tracing::info!(user_id = admin.user_id, "deleting");
///     Ok(StatusCode::NO_CONTENT)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The admin's database id (from `claims.sub`).
    pub user_id: DbId,
    pub username: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let Some(token) = extract_token(&parts.headers) else {
            tracing::debug!(path = %parts.uri.path(), reason = "missing_token", "Rejected request");
            return Err(AppError::Core(CoreError::Unauthorized(
                "Not authenticated".into(),
            )));
        };

        let claims = validate_token(&token, &state.config.jwt).map_err(|e| {
            tracing::debug!(
                path = %parts.uri.path(),
                reason = "invalid_token",
                error = %e,
                "Rejected request",
            );
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            username: claims.username,
        })
    }
}
