//! Request extractors whose rejections render as [`AppError`].
//!
//! axum's stock `Json` and `Path` reject with plain-text 4xx bodies; these
//! wrappers route the same failures through the `{error, code}` shape.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON body extractor. Missing fields and wrong types are a
/// `VALIDATION_ERROR`; unparseable bodies are a `BAD_REQUEST`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// Path parameter extractor (`/products/abc` is a `BAD_REQUEST`).
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
