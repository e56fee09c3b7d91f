use crate::validation::Violation;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Classroom failed validation ({} violation(s))", .0.len())]
    Validation(Vec<Violation>),

    #[error("Classroom not found: {0}")]
    NotFound(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: &'static str,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    violations: Vec<Violation>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, error, violations) = match self {
            ApiError::Validation(violations) => {
                tracing::warn!("{}", message);
                (StatusCode::BAD_REQUEST, "BadRequest", violations)
            }
            ApiError::NotFound(_) => {
                tracing::warn!("{}", message);
                (StatusCode::NOT_FOUND, "NotFound", Vec::new())
            }
            ApiError::Database(_) => {
                tracing::error!("{}", message);
                (StatusCode::INTERNAL_SERVER_ERROR, "DatabaseError", Vec::new())
            }
        };

        let body = Json(ErrorResponse {
            error,
            message,
            violations,
        });

        (status, body).into_response()
    }
}
