pub mod auth;
pub mod health;
pub mod pages;
pub mod products;
pub mod settings;
pub mod testimonials;
pub mod upload;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login                       login (sets session cookie)
/// /auth/logout                      logout (clears session cookie)
/// /auth/me                          current admin
///
/// /upload                           image upload
///
/// /settings                         get, partial update
/// /pages/{slug}                     all sections of a page
/// /pages/{slug}/{section_key}       upsert one section
///
/// /products                         list, create
/// /products/{id}                    get, update, delete
///
/// /testimonials                     list, create
/// /testimonials/{id}                get, update, delete
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/upload", upload::router())
        .nest("/settings", settings::router())
        .nest("/pages", pages::router())
        .nest("/products", products::router())
        .nest("/testimonials", testimonials::router())
}
