mod classroom;
mod extract;
mod form;

use crate::AppState;
use crate::error::ApiError;
use crate::models::Classroom;
use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use extract::ResolvedClassroom;
use form::ClassroomForm;
use std::sync::Arc;

/// Routes for the classroom resource, mounted at `/classrooms`
pub fn classroom_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/classrooms", get(list_classrooms).post(create_classroom))
        .route("/classrooms/", get(list_classrooms).post(create_classroom))
        .route(
            "/classrooms/:id",
            get(get_classroom).put(update_classroom).delete(delete_classroom),
        )
}

async fn list_classrooms(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Classroom>>, ApiError> {
    classroom::list(state.classrooms.as_ref()).await
}

async fn get_classroom(ResolvedClassroom(classroom): ResolvedClassroom) -> Json<Classroom> {
    classroom::show(classroom)
}

async fn create_classroom(
    State(state): State<Arc<AppState>>,
    form: ClassroomForm,
) -> Result<(StatusCode, Json<Classroom>), ApiError> {
    classroom::create(state.classrooms.as_ref(), form).await
}

// The resolved classroom must stay ahead of the body extractor
async fn update_classroom(
    State(state): State<Arc<AppState>>,
    ResolvedClassroom(classroom): ResolvedClassroom,
    form: ClassroomForm,
) -> Result<Json<Classroom>, ApiError> {
    classroom::update(state.classrooms.as_ref(), classroom, form).await
}

async fn delete_classroom(
    State(state): State<Arc<AppState>>,
    ResolvedClassroom(classroom): ResolvedClassroom,
) -> Result<Json<&'static str>, ApiError> {
    classroom::delete(state.classrooms.as_ref(), classroom).await
}
