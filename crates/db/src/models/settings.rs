//! Site settings singleton.

use std::collections::BTreeMap;

use jennskin_core::types::Timestamp;
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// Marketplace / chat links keyed by channel name (`shopee`, `whatsapp`, ...).
pub type StoreLinks = BTreeMap<String, String>;

/// The single row of `site_settings` (always `id = 1`).
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SiteSettings {
    pub id: i16,
    pub brand_tagline: String,
    pub bpom_number: String,
    pub store_links: Json<StoreLinks>,
    pub updated_at: Timestamp,
}

/// Partial settings update. Omitted (or `null`) fields keep their value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSiteSettings {
    pub brand_tagline: Option<String>,
    pub bpom_number: Option<String>,
    pub store_links: Option<StoreLinks>,
}
