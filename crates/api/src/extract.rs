//! Extractors whose rejections use the JSON error body of [`AppError`].
//!
//! Axum's stock `Json` and `Path` reject with plain text (and 422 for
//! well-formed JSON of the wrong shape). These wrappers answer 400 with
//! `{ "error": ..., "code": "BAD_REQUEST" }` instead.

use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// `axum::Json` with [`AppError`] rejections.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// `axum::extract::Path` with [`AppError`] rejections.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);
