//! Handlers for the `/testimonials` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use jennskin_core::error::CoreError;
use jennskin_core::types::DbId;
use jennskin_db::models::testimonial::{CreateTestimonial, Testimonial, UpdateTestimonial};
use jennskin_db::repositories::TestimonialRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Testimonial",
        id,
    })
}

/// GET /api/testimonials
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Testimonial>>> {
    let testimonials = TestimonialRepo::list(&state.pool).await?;
    Ok(Json(testimonials))
}

/// GET /api/testimonials/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Testimonial>> {
    let testimonial = TestimonialRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(testimonial))
}

/// POST /api/testimonials
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateTestimonial>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    input.validate()?;
    let testimonial = TestimonialRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        testimonial_id = testimonial.id,
        "Testimonial created",
    );

    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PUT /api/testimonials/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateTestimonial>,
) -> AppResult<Json<Testimonial>> {
    input.validate()?;
    let testimonial = TestimonialRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(user_id = auth.user_id, testimonial_id = id, "Testimonial updated");

    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !TestimonialRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(user_id = auth.user_id, testimonial_id = id, "Testimonial deleted");

    Ok(Json(SuccessResponse::ok()))
}
