//! Handlers for the `/settings` singleton.

use axum::extract::State;
use axum::Json;
use jennskin_db::models::settings::{SiteSettings, UpdateSiteSettings};
use jennskin_db::repositories::SettingsRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// GET /api/settings
pub async fn get_settings(State(state): State<AppState>) -> AppResult<Json<SiteSettings>> {
    let settings = SettingsRepo::get(&state.pool).await?;
    Ok(Json(settings))
}

/// PUT /api/settings
///
/// Partial update: omitted fields keep their stored value.
pub async fn update_settings(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<UpdateSiteSettings>,
) -> AppResult<Json<SiteSettings>> {
    let settings = SettingsRepo::update(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        tagline_changed = input.brand_tagline.is_some(),
        bpom_changed = input.bpom_number.is_some(),
        store_links_changed = input.store_links.is_some(),
        "Site settings updated",
    );

    Ok(Json(settings))
}
