//! Tests for `AppError` → HTTP response mapping.
//!
//! No HTTP server or database: these call `IntoResponse` directly.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use jennskin_api::error::AppError;
use jennskin_core::error::CoreError;
use jennskin_core::upload::UploadRejection;
use validator::Validate;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_error_returns_404() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Product",
        id: 42,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Product with id 42 not found");
}

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("Not authenticated".into())))
            .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Not authenticated");
}

#[tokio::test]
async fn bad_request_error_returns_400() {
    let (status, json) = error_to_response(AppError::BadRequest("bad multipart".into())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "bad multipart");
}

#[tokio::test]
async fn upload_rejection_returns_invalid_upload() {
    let (status, json) = error_to_response(
        UploadRejection::ExtensionMismatch {
            mime: "image/png".into(),
            extension: "jpg".into(),
        }
        .into(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_UPLOAD");
    assert_eq!(
        json["error"],
        "File extension '.jpg' does not match declared type 'image/png'"
    );
}

#[tokio::test]
async fn conflict_error_returns_409() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Conflict("taken".into()))).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn internal_errors_hide_details() {
    for err in [
        AppError::InternalError("disk full at /var/uploads".into()),
        AppError::Core(CoreError::Internal("secret detail".into())),
        AppError::Database(sqlx::Error::PoolTimedOut),
    ] {
        let (status, json) = error_to_response(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
    }
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
}

#[derive(Validate)]
struct Named {
    #[validate(length(min = 1, message = "must not be empty"))]
    name: String,
}

#[tokio::test]
async fn validation_errors_name_the_field() {
    let errors = Named {
        name: String::new(),
    }
    .validate()
    .unwrap_err();

    let (status, json) = error_to_response(errors.into()).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "name: must not be empty");
}
