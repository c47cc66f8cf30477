//! Repository for the `testimonials` table.

use jennskin_core::types::DbId;
use sqlx::PgPool;

use crate::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, text, role, created_at";

/// Provides CRUD operations for testimonials.
pub struct TestimonialRepo;

impl TestimonialRepo {
    /// List all testimonials in insertion order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials ORDER BY created_at, id");
        sqlx::query_as::<_, Testimonial>(&query)
            .fetch_all(pool)
            .await
    }

    /// Find a testimonial by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM testimonials WHERE id = $1");
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new testimonial, returning the created row.
    pub async fn create(
        pool: &PgPool,
        input: &CreateTestimonial,
    ) -> Result<Testimonial, sqlx::Error> {
        let query = format!(
            "INSERT INTO testimonials (name, text, role)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(&input.name)
            .bind(&input.text)
            .bind(&input.role)
            .fetch_one(pool)
            .await
    }

    /// Update a testimonial. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTestimonial,
    ) -> Result<Option<Testimonial>, sqlx::Error> {
        let query = format!(
            "UPDATE testimonials SET
                name = COALESCE($2, name),
                text = COALESCE($3, text),
                role = COALESCE($4, role)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Testimonial>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.text)
            .bind(&input.role)
            .fetch_optional(pool)
            .await
    }

    /// Delete a testimonial by ID.
    ///
    /// Deleting a missing row is not an error here; returns `true` if a row
    /// was deleted so the caller can decide.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM testimonials WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of testimonials.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM testimonials")
            .fetch_one(pool)
            .await
    }
}
