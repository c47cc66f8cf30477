//! Handlers for the `/products` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use jennskin_core::catalog::{validate_category, validate_list_entries, validate_slug};
use jennskin_core::error::CoreError;
use jennskin_core::types::DbId;
use jennskin_db::models::product::{CreateProduct, Product, UpdateProduct};
use jennskin_db::repositories::ProductRepo;
use validator::Validate;

use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::middleware::auth::AuthUser;
use crate::response::SuccessResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Product",
        id,
    })
}

/// GET /api/products
///
/// Ordered by `sort_order`, then `created_at`.
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = ProductRepo::list(&state.pool).await?;
    Ok(Json(products))
}

/// GET /api/products/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<Product>> {
    let product = ProductRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(product))
}

/// POST /api/products
pub async fn create(
    auth: AuthUser,
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateProduct>,
) -> AppResult<(StatusCode, Json<Product>)> {
    input.validate()?;
    validate_slug(&input.slug)?;
    validate_category(&input.category)?;
    validate_list_entries("benefits", &input.benefits)?;
    validate_list_entries("ingredients", &input.ingredients)?;
    if let Some(scents) = &input.scents {
        validate_list_entries("scents", scents)?;
    }

    let product = ProductRepo::create(&state.pool, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        product_id = product.id,
        slug = %product.slug,
        "Product created",
    );

    Ok((StatusCode::CREATED, Json(product)))
}

/// PUT /api/products/{id}
pub async fn update(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
    AppJson(input): AppJson<UpdateProduct>,
) -> AppResult<Json<Product>> {
    input.validate()?;
    if let Some(slug) = &input.slug {
        validate_slug(slug)?;
    }
    if let Some(category) = &input.category {
        validate_category(category)?;
    }
    if let Some(benefits) = &input.benefits {
        validate_list_entries("benefits", benefits)?;
    }
    if let Some(ingredients) = &input.ingredients {
        validate_list_entries("ingredients", ingredients)?;
    }
    if let Some(Some(scents)) = &input.scents {
        validate_list_entries("scents", scents)?;
    }

    let product = ProductRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    tracing::info!(user_id = auth.user_id, product_id = id, "Product updated");

    Ok(Json(product))
}

/// DELETE /api/products/{id}
pub async fn delete(
    auth: AuthUser,
    State(state): State<AppState>,
    AppPath(id): AppPath<DbId>,
) -> AppResult<Json<SuccessResponse>> {
    if !ProductRepo::delete(&state.pool, id).await? {
        return Err(not_found(id));
    }

    tracing::info!(user_id = auth.user_id, product_id = id, "Product deleted");

    Ok(Json(SuccessResponse::ok()))
}
