use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;
use jennskin_core::upload::MAX_UPLOAD_BYTES;

use crate::handlers::upload;
use crate::state::AppState;

/// Headroom over [`MAX_UPLOAD_BYTES`] for multipart boundaries and headers,
/// so an oversized image reaches the handler's own size check.
const MULTIPART_OVERHEAD_BYTES: usize = 64 * 1024;

/// Routes mounted at `/upload`.
///
/// ```text
/// POST /  -> upload_image (requires auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(upload::upload_image))
        .layer(DefaultBodyLimit::max(
            MAX_UPLOAD_BYTES + MULTIPART_OVERHEAD_BYTES,
        ))
}
