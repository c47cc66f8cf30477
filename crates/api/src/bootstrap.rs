//! First-boot setup: the bootstrap admin account and default content.

use jennskin_db::models::admin_user::CreateAdminUser;
use jennskin_db::repositories::AdminUserRepo;
use jennskin_db::seed::{seed_default_content, SeedReport};
use jennskin_db::DbPool;

use crate::auth::password::hash_password;
use crate::config::{AdminSeedConfig, ServerConfig};
use crate::error::{AppError, AppResult};

/// Create the bootstrap admin if `admin_users` is empty.
///
/// Returns `true` when an account was created. The credentials are
/// well-known defaults unless overridden, so a warning tells the operator
/// to rotate them.
pub async fn ensure_admin_account(pool: &DbPool, seed: &AdminSeedConfig) -> AppResult<bool> {
    if AdminUserRepo::count(pool).await? > 0 {
        return Ok(false);
    }

    let password_hash = hash_password(&seed.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing failed: {e}")))?;
    let user = AdminUserRepo::create(
        pool,
        &CreateAdminUser {
            username: seed.username.clone(),
            password_hash,
        },
    )
    .await?;

    tracing::warn!(
        user_id = user.id,
        username = %user.username,
        "Bootstrap admin account created; rotate its password",
    );
    Ok(true)
}

/// Run all first-boot steps that apply under `config`.
pub async fn bootstrap(pool: &DbPool, config: &ServerConfig) -> AppResult<Option<SeedReport>> {
    ensure_admin_account(pool, &config.admin_seed).await?;

    if !config.seed_default_content {
        return Ok(None);
    }
    let report = seed_default_content(pool).await?;
    Ok(Some(report))
}
