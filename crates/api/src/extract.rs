//! Request extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with its rejection mapped into [`AppError`].
///
/// A body that is not JSON, or whose fields have the wrong type, answers
/// 400 `VALIDATION_ERROR` with the usual `{ error, code }` body instead of
/// axum's plain-text 4xx.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct JsonBody<T>(pub T);
