use axum::routing::{get, put};
use axum::Router;

use crate::handlers::pages;
use crate::state::AppState;

/// Routes mounted at `/pages`.
///
/// ```text
/// GET /{slug}                -> get_page
/// PUT /{slug}/{section_key}  -> upsert_section (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{slug}", get(pages::get_page))
        .route("/{slug}/{section_key}", put(pages::upsert_section))
}
