//! Repository for the `page_sections` table.

use sqlx::PgPool;

use crate::models::page_section::PageSection;

/// Column list for `page_sections` queries.
const COLUMNS: &str = "id, page_slug, section_key, content, updated_at";

/// Provides reads and keyed upserts for page sections.
pub struct PageSectionRepo;

impl PageSectionRepo {
    /// All sections of a page, ordered by section key.
    ///
    /// Returns an empty list for an unknown page.
    pub async fn list_for_page(
        pool: &PgPool,
        page_slug: &str,
    ) -> Result<Vec<PageSection>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM page_sections WHERE page_slug = $1 ORDER BY section_key"
        );
        sqlx::query_as::<_, PageSection>(&query)
            .bind(page_slug)
            .fetch_all(pool)
            .await
    }

    /// Insert or wholesale-replace the content of one section.
    ///
    /// Uses `ON CONFLICT (page_slug, section_key) DO UPDATE`; the stored
    /// content is never merged with the previous value.
    pub async fn upsert(
        pool: &PgPool,
        page_slug: &str,
        section_key: &str,
        content: &serde_json::Value,
    ) -> Result<PageSection, sqlx::Error> {
        let query = format!(
            "INSERT INTO page_sections (page_slug, section_key, content)
             VALUES ($1, $2, $3)
             ON CONFLICT (page_slug, section_key) DO UPDATE SET
                 content = EXCLUDED.content,
                 updated_at = NOW()
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, PageSection>(&query)
            .bind(page_slug)
            .bind(section_key)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Total number of stored sections across all pages.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM page_sections")
            .fetch_one(pool)
            .await
    }
}
