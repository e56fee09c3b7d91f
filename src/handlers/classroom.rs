//! Classroom resource operations.
//!
//! Every function here receives an already-resolved [`Classroom`] where one is
//! needed; looking up `{id}` and answering 404 happens in the routing layer.

use super::form::ClassroomForm;
use crate::db::ClassroomGateway;
use crate::error::ApiError;
use crate::models::Classroom;
use crate::validation::validate;
use axum::{http::StatusCode, Json};

pub const DELETED: &str = "DELETED";

pub async fn list(gateway: &dyn ClassroomGateway) -> Result<Json<Vec<Classroom>>, ApiError> {
    let classrooms = gateway.find_all().await?;
    tracing::debug!("Listing {} classroom(s)", classrooms.len());
    Ok(Json(classrooms))
}

pub fn show(classroom: Classroom) -> Json<Classroom> {
    Json(classroom)
}

pub async fn create(
    gateway: &dyn ClassroomGateway,
    form: ClassroomForm,
) -> Result<(StatusCode, Json<Classroom>), ApiError> {
    let classroom = Classroom::new(
        form.name.unwrap_or_default(),
        form.is_active.unwrap_or(true),
    );

    let violations = validate(&classroom);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let classroom = gateway.save(&classroom).await?;
    tracing::info!("Created classroom {} ({})", classroom.id, classroom.name);

    Ok((StatusCode::CREATED, Json(classroom)))
}

/// Apply only the supplied fields, then validate and save the whole record
pub async fn update(
    gateway: &dyn ClassroomGateway,
    mut classroom: Classroom,
    form: ClassroomForm,
) -> Result<Json<Classroom>, ApiError> {
    if let Some(name) = form.name {
        classroom.name = name;
    }
    if let Some(is_active) = form.is_active {
        classroom.is_active = is_active;
    }

    let violations = validate(&classroom);
    if !violations.is_empty() {
        return Err(ApiError::Validation(violations));
    }

    let classroom = gateway.save(&classroom).await?;
    tracing::info!("Updated classroom {}", classroom.id);

    Ok(Json(classroom))
}

pub async fn delete(
    gateway: &dyn ClassroomGateway,
    classroom: Classroom,
) -> Result<Json<&'static str>, ApiError> {
    gateway.delete(&classroom).await?;
    tracing::info!("Deleted classroom {}", classroom.id);
    Ok(Json(DELETED))
}
