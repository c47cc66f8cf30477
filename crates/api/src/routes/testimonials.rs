use axum::routing::get;
use axum::Router;

use crate::handlers::testimonials;
use crate::state::AppState;

/// Routes mounted at `/testimonials`. Same shape as `/products`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(testimonials::list).post(testimonials::create))
        .route(
            "/{id}",
            get(testimonials::get_by_id)
                .put(testimonials::update)
                .delete(testimonials::delete),
        )
}
