//! Repository for the `site_settings` singleton.
//!
//! The table holds exactly one row (`id = 1`, enforced by a CHECK constraint
//! and created by migration). There is no insert or delete.

use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::settings::{SiteSettings, UpdateSiteSettings};

/// Column list for `site_settings` queries.
const COLUMNS: &str = "id, brand_tagline, bpom_number, store_links, updated_at";

/// Fixed primary key of the singleton row.
const SETTINGS_ID: i16 = 1;

/// Provides `get` / `update` for the site settings singleton.
pub struct SettingsRepo;

impl SettingsRepo {
    /// Fetch the settings row.
    pub async fn get(pool: &PgPool) -> Result<SiteSettings, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM site_settings WHERE id = $1");
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .fetch_one(pool)
            .await
    }

    /// Partially update the settings row.
    ///
    /// Uses `COALESCE` in a single statement so only provided fields change
    /// and a concurrent update is never interleaved field-by-field. Two
    /// editors still overwrite each other last-write-wins.
    pub async fn update(
        pool: &PgPool,
        dto: &UpdateSiteSettings,
    ) -> Result<SiteSettings, sqlx::Error> {
        let query = format!(
            "UPDATE site_settings SET
                brand_tagline = COALESCE($2, brand_tagline),
                bpom_number = COALESCE($3, bpom_number),
                store_links = COALESCE($4, store_links),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, SiteSettings>(&query)
            .bind(SETTINGS_ID)
            .bind(&dto.brand_tagline)
            .bind(&dto.bpom_number)
            .bind(dto.store_links.as_ref().map(Json))
            .fetch_one(pool)
            .await
    }
}
