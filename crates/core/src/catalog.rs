//! Product catalog rules.
//!
//! Category names and slug format are checked here before any insert or
//! update reaches the `products` table. The table carries matching CHECK
//! and unique constraints, so these functions only exist to turn bad
//! input into a readable 400 instead of a database error.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/* --------------------------------------------------------------------------
Named constants
-------------------------------------------------------------------------- */

pub const CATEGORY_SERUM: &str = "Serum";
pub const CATEGORY_MOISTURIZER: &str = "Moisturizer";
pub const CATEGORY_DEODORANT: &str = "Deodorant";
pub const CATEGORY_CLEANSER: &str = "Cleanser";
pub const CATEGORY_TONER: &str = "Toner";

/// All recognized product categories, in storefront filter order.
pub const ALL_CATEGORIES: &[&str] = &[
    CATEGORY_SERUM,
    CATEGORY_MOISTURIZER,
    CATEGORY_DEODORANT,
    CATEGORY_CLEANSER,
    CATEGORY_TONER,
];

/// Maximum slug length (matches the `VARCHAR(120)` column).
pub const MAX_SLUG_LENGTH: usize = 120;

/// Lowercase ASCII words separated by single hyphens, e.g. `green-apple-serum`.
static SLUG_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9]+(?:-[a-z0-9]+)*$").expect("slug pattern is valid"));

/* --------------------------------------------------------------------------
Validation functions
-------------------------------------------------------------------------- */

/// Validate that `category` is one of [`ALL_CATEGORIES`] (case-sensitive).
pub fn validate_category(category: &str) -> Result<(), CoreError> {
    if ALL_CATEGORIES.contains(&category) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "Unknown product category: '{}'. Valid categories: {}",
            category,
            ALL_CATEGORIES.join(", ")
        )))
    }
}

/// Validate a product slug: non-empty, bounded, lowercase-hyphenated.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if slug.len() > MAX_SLUG_LENGTH {
        return Err(CoreError::Validation(format!(
            "Slug must not exceed {MAX_SLUG_LENGTH} characters"
        )));
    }
    if !SLUG_PATTERN.is_match(slug) {
        return Err(CoreError::Validation(format!(
            "Invalid slug '{slug}': use lowercase letters, digits and single hyphens"
        )));
    }
    Ok(())
}

/// Validate that no entry of a list field is blank.
///
/// Empty lists are allowed; `field` names the list in the error message.
pub fn validate_list_entries(field: &str, entries: &[String]) -> Result<(), CoreError> {
    if let Some(pos) = entries.iter().position(|e| e.trim().is_empty()) {
        return Err(CoreError::Validation(format!(
            "{field}[{pos}] must not be blank"
        )));
    }
    Ok(())
}
