//! Product catalog model and DTOs.

use jennskin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `products` table.
///
/// `scents` is `None` for products without scent variants and `Some(vec![])`
/// for scent-variant products with nothing listed yet; both round-trip as-is.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Product {
    pub id: DbId,
    pub slug: String,
    pub name: String,
    pub category: String,
    pub description: String,
    pub benefits: Vec<String>,
    pub ingredients: Vec<String>,
    pub image_url: String,
    pub scents: Option<Vec<String>>,
    pub best_seller: bool,
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "slug is required"))]
    pub slug: String,
    #[validate(length(min = 1, message = "name is required"))]
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub benefits: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub ingredients: Vec<String>,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub scents: Option<Vec<String>>,
    #[serde(default)]
    pub best_seller: bool,
    #[serde(default)]
    pub sort_order: i32,
}

/// DTO for updating a product. Omitted fields keep their value.
///
/// `scents` distinguishes three cases: field absent (keep), `null` (clear to
/// "not scent-variant") and an array (replace).
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "slug must not be empty"))]
    pub slug: Option<String>,
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
    pub benefits: Option<Vec<String>>,
    pub ingredients: Option<Vec<String>>,
    pub image_url: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub scents: Option<Option<Vec<String>>>,
    pub best_seller: Option<bool>,
    pub sort_order: Option<i32>,
}

/// Treat an explicit `null` list as empty.
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Mark a field as present (including `null`); absence falls back to `default`.
fn present<'de, D>(deserializer: D) -> Result<Option<Option<Vec<String>>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<String>>::deserialize(deserializer).map(Some)
}
