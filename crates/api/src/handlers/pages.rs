//! Handlers for page content (`/pages/{slug}` and its sections).

use axum::extract::State;
use axum::Json;
use jennskin_core::content::{validate_identifier, validate_section_content};
use jennskin_db::models::page_section::{PageContent, PageSection, UpsertPageSection};
use jennskin_db::repositories::PageSectionRepo;

use crate::error::AppResult;
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/pages/{slug}
///
/// An unknown slug returns an empty `sections` map, not 404.
pub async fn get_page(
    State(state): State<AppState>,
    AppPath(slug): AppPath<String>,
) -> AppResult<Json<PageContent>> {
    let rows = PageSectionRepo::list_for_page(&state.pool, &slug).await?;
    Ok(Json(PageContent::from_sections(slug, rows)))
}

/// PUT /api/pages/{slug}/{section_key}
///
/// Creates the section or replaces its content wholesale.
pub async fn upsert_section(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath((slug, section_key)): AppPath<(String, String)>,
    AppJson(input): AppJson<UpsertPageSection>,
) -> AppResult<Json<PageSection>> {
    validate_identifier("page slug", &slug)?;
    validate_identifier("section key", &section_key)?;
    validate_section_content(&input.content)?;

    let section = PageSectionRepo::upsert(&state.pool, &slug, &section_key, &input.content).await?;

    tracing::info!(
        user_id = auth.user_id,
        page = %slug,
        section = %section_key,
        "Page section saved",
    );

    Ok(Json(section))
}
