//! Image upload handler (`POST /upload`).
//!
//! The multipart field `image` is checked for declared type and extension
//! before its body is read, the body is buffered chunk by chunk up to
//! [`MAX_UPLOAD_BYTES`], and only then written to `UPLOAD_DIR` under a
//! server-generated name.

use axum::extract::multipart::{Field, MultipartError};
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::Json;
use jennskin_core::upload::{
    public_url, stored_filename, validate_image, validate_size, UploadRejection, MAX_UPLOAD_BYTES,
};
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Multipart field carrying the image.
pub const UPLOAD_FIELD_NAME: &str = "image";

/// Response body for a stored upload.
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Public path the image is served from (`/uploads/<filename>`).
    pub url: String,
    /// Server-generated stored name.
    pub filename: String,
}

/// POST /api/upload
pub async fn upload_image(
    auth: AuthUser,
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> AppResult<Json<UploadResponse>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue; // ignore unrelated fields
        }

        let declared_mime = field.content_type().unwrap_or_default().to_string();
        let original_name = field.file_name().unwrap_or_default().to_string();
        let extension = validate_image(&declared_mime, &original_name).inspect_err(|r| {
            tracing::debug!(mime = %declared_mime, rejection = %r, "Upload rejected");
        })?;

        let data = read_limited(field).await?;
        validate_size(data.len())?;

        let filename = stored_filename(&extension);
        store(&state, &filename, &data).await?;

        tracing::info!(
            user_id = auth.user_id,
            filename = %filename,
            size = data.len(),
            mime = %declared_mime,
            "Image uploaded",
        );

        return Ok(Json(UploadResponse {
            url: public_url(&filename),
            filename,
        }));
    }

    Err(AppError::BadRequest(format!(
        "Missing required '{UPLOAD_FIELD_NAME}' file field"
    )))
}

/// Buffer a field's body, failing as soon as it passes [`MAX_UPLOAD_BYTES`].
async fn read_limited(mut field: Field<'_>) -> AppResult<Vec<u8>> {
    let mut data = Vec::new();
    while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
        if data.len() + chunk.len() > MAX_UPLOAD_BYTES {
            return Err(UploadRejection::TooLarge.into());
        }
        data.extend_from_slice(&chunk);
    }
    Ok(data)
}

/// Write the validated bytes, removing any partial file on failure.
async fn store(state: &AppState, filename: &str, data: &[u8]) -> AppResult<()> {
    let dir = &state.config.upload_dir;
    tokio::fs::create_dir_all(dir)
        .await
        .map_err(|e| AppError::InternalError(format!("Cannot create upload dir: {e}")))?;

    let path = dir.join(filename);
    if let Err(e) = tokio::fs::write(&path, data).await {
        let _ = tokio::fs::remove_file(&path).await;
        return Err(AppError::InternalError(format!(
            "Failed to write {}: {e}",
            path.display()
        )));
    }
    Ok(())
}

/// The body limit layer surfaces as a 413 multipart error; report it as an
/// oversized upload rather than a malformed request.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        UploadRejection::TooLarge.into()
    } else {
        AppError::BadRequest(err.body_text())
    }
}
