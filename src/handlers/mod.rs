pub mod vendor;
pub mod product;
pub mod service;
pub mod stats;

use axum::extract::{
    rejection::{FormRejection, JsonRejection},
    FromRequest, FromRequestParts, Path, Request,
};
use axum::http::request::Parts;
use axum::{Form, Json};
use http::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;

use crate::error::AppError;

/// Request body read as JSON, or as `application/x-www-form-urlencoded` when the
/// content type says so. Rejections come back as `{"error": ...}` with status 400.
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|ct| ct.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(value) = Form::<T>::from_request(req, state).await?;
            Ok(JsonBody(value))
        } else {
            let Json(value) = Json::<T>::from_request(req, state).await?;
            Ok(JsonBody(value))
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        AppError::validation(rejection.body_text())
    }
}

/// The `{id}` path segment. A segment that is not an integer can match no row,
/// so it is `None` rather than a rejection.
#[derive(Debug, Clone, Copy)]
pub struct RowId(pub Option<i64>);

impl<S> FromRequestParts<S> for RowId
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(RowId(raw.trim().parse().ok()))
    }
}
