//! Request extractors for the classroom routes.

use super::form::ClassroomForm;
use crate::db::ClassroomGateway;
use crate::error::ApiError;
use crate::models::Classroom;
use crate::AppState;
use async_trait::async_trait;
use axum::{
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::{header, request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Form,
};
use std::sync::Arc;

/// The classroom named by the `{id}` path segment.
///
/// Runs ahead of any body extractor, so an unknown id answers 404 no matter
/// what the body holds. An id that is not a valid integer cannot name a row
/// and is treated the same way.
pub struct ResolvedClassroom(pub Classroom);

#[async_trait]
impl FromRequestParts<Arc<AppState>> for ResolvedClassroom {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| ApiError::NotFound(String::new()))?;

        let id = match raw.parse::<i32>() {
            Ok(id) => id,
            Err(_) => return Err(ApiError::NotFound(raw)),
        };

        state
            .classrooms
            .find_by_id(id)
            .await?
            .map(ResolvedClassroom)
            .ok_or_else(|| ApiError::NotFound(raw))
    }
}

#[async_trait]
impl<S> FromRequest<S> for ClassroomForm
where
    S: Send + Sync,
{
    type Rejection = Response;

    /// Decode a form body; a request without a Content-Type and without a
    /// body carries no fields
    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if req.headers().contains_key(header::CONTENT_TYPE) {
            let Form(form) = Form::<ClassroomForm>::from_request(req, state)
                .await
                .map_err(IntoResponse::into_response)?;
            return Ok(form);
        }

        let body = Bytes::from_request(req, state)
            .await
            .map_err(IntoResponse::into_response)?;
        if body.iter().all(u8::is_ascii_whitespace) {
            Ok(ClassroomForm::default())
        } else {
            Err(StatusCode::UNSUPPORTED_MEDIA_TYPE.into_response())
        }
    }
}
