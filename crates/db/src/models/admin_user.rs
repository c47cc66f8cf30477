//! Admin account model.

use jennskin_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full row from the `admin_users` table.
///
/// Contains the password hash -- NEVER serialize this to API responses directly.
/// Use [`AdminUserInfo`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct AdminUser {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub created_at: Timestamp,
}

/// Public identity of an admin, as embedded in login and `/auth/me` responses.
#[derive(Debug, Clone, Serialize)]
pub struct AdminUserInfo {
    pub id: DbId,
    pub username: String,
}

impl From<&AdminUser> for AdminUserInfo {
    fn from(user: &AdminUser) -> Self {
        Self {
            id: user.id,
            username: user.username.clone(),
        }
    }
}

/// DTO for inserting an admin account (bootstrap only).
#[derive(Debug)]
pub struct CreateAdminUser {
    pub username: String,
    pub password_hash: String,
}
