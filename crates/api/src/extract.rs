//! Request extractors that reject with [`AppError`].
//!
//! Axum's own `Json` and `Path` answer a bad body or path segment with a
//! plain-text 400/415/422. These wrappers route the same rejections through
//! [`AppError::BadRequest`] so every failure carries the `{error, code}`
//! JSON body.
//!
//! ```ignore
//! async fn handler(AppPath(id): AppPath<DbId>, AppJson(items): AppJson<Vec<GridItem>>) { .. }
//! ```

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{FromRequest, FromRequestParts};

use crate::error::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

/// URL path parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct AppPath<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError::BadRequest(rejection.body_text())
    }
}
