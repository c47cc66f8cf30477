//! Repository for the `products` table.

use jennskin_core::types::DbId;
use sqlx::PgPool;

use crate::models::product::{CreateProduct, Product, UpdateProduct};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, slug, name, category, description, benefits, ingredients, \
                        image_url, scents, best_seller, sort_order, created_at, updated_at";

/// Display ordering: explicit sort order, then creation time, then id.
const DISPLAY_ORDER: &str = "sort_order, created_at, id";

/// Provides CRUD operations for products.
pub struct ProductRepo;

impl ProductRepo {
    /// List all products in display order.
    pub async fn list(pool: &PgPool) -> Result<Vec<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products ORDER BY {DISPLAY_ORDER}");
        sqlx::query_as::<_, Product>(&query).fetch_all(pool).await
    }

    /// Find a product by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Product>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM products WHERE id = $1");
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Insert a new product, returning the created row.
    ///
    /// List fields are stored in the order given; `scents` is stored as
    /// `NULL` when `None` and as an empty array when `Some(vec![])`.
    pub async fn create(pool: &PgPool, input: &CreateProduct) -> Result<Product, sqlx::Error> {
        let query = format!(
            "INSERT INTO products
                (slug, name, category, description, benefits, ingredients,
                 image_url, scents, best_seller, sort_order)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.benefits)
            .bind(&input.ingredients)
            .bind(&input.image_url)
            .bind(&input.scents)
            .bind(input.best_seller)
            .bind(input.sort_order)
            .fetch_one(pool)
            .await
    }

    /// Update a product. Only non-`None` fields in `input` are applied.
    ///
    /// `scents` is replaced (possibly with `NULL`) only when the field was
    /// present in the request. Returns `None` if no row with `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateProduct,
    ) -> Result<Option<Product>, sqlx::Error> {
        let (replace_scents, scents) = match &input.scents {
            Some(value) => (true, value.as_ref()),
            None => (false, None),
        };

        let query = format!(
            "UPDATE products SET
                slug = COALESCE($2, slug),
                name = COALESCE($3, name),
                category = COALESCE($4, category),
                description = COALESCE($5, description),
                benefits = COALESCE($6::text[], benefits),
                ingredients = COALESCE($7::text[], ingredients),
                image_url = COALESCE($8, image_url),
                scents = CASE WHEN $9 THEN $10::text[] ELSE scents END,
                best_seller = COALESCE($11, best_seller),
                sort_order = COALESCE($12, sort_order),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Product>(&query)
            .bind(id)
            .bind(&input.slug)
            .bind(&input.name)
            .bind(&input.category)
            .bind(&input.description)
            .bind(&input.benefits)
            .bind(&input.ingredients)
            .bind(&input.image_url)
            .bind(replace_scents)
            .bind(scents)
            .bind(input.best_seller)
            .bind(input.sort_order)
            .fetch_optional(pool)
            .await
    }

    /// Delete a product by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of products.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM products")
            .fetch_one(pool)
            .await
    }
}
