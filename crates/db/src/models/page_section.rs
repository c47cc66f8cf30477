//! Page section model.
//!
//! `content` is an opaque JSON value: which keys matter for which page is
//! decided by the storefront renderer, never by the store.

use std::collections::BTreeMap;

use jennskin_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `page_sections` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct PageSection {
    pub id: DbId,
    pub page_slug: String,
    pub section_key: String,
    pub content: serde_json::Value,
    pub updated_at: Timestamp,
}

/// Body of `PUT /pages/{slug}/{section_key}`: the full replacement content.
#[derive(Debug, Clone, Deserialize)]
pub struct UpsertPageSection {
    pub content: serde_json::Value,
}

/// All sections of one page keyed by section key.
///
/// An unknown page yields an empty `sections` map.
#[derive(Debug, Clone, Serialize)]
pub struct PageContent {
    pub slug: String,
    pub sections: BTreeMap<String, serde_json::Value>,
}

impl PageContent {
    pub fn from_sections(slug: impl Into<String>, rows: Vec<PageSection>) -> Self {
        Self {
            slug: slug.into(),
            sections: rows
                .into_iter()
                .map(|row| (row.section_key, row.content))
                .collect(),
        }
    }
}
