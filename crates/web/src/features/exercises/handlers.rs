use axum::{
    Json,
    extract::{Path, Query, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::exercise::ExerciseFilter, models::Exercise};

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/exercises",
    params(ExerciseFilter),
    responses(
        (status = 200, description = "Exercises matching the filter, sorted by name", body = Vec<Exercise>),
        (status = 400, description = "Unknown muscle group")
    ),
    tag = "exercises"
)]
pub async fn list_exercises(
    State(db): State<Database>,
    Query(filter): Query<ExerciseFilter>,
) -> Result<Response, WebError> {
    let exercises = services::list_exercises(db.pool(), &filter).await?;

    Ok(Json(exercises).into_response())
}

#[utoipa::path(
    get,
    path = "/api/exercises/{id}",
    params(
        ("id" = String, Path, description = "Exercise id")
    ),
    responses(
        (status = 200, description = "Exercise found", body = Exercise),
        (status = 404, description = "Exercise not found")
    ),
    tag = "exercises"
)]
pub async fn get_exercise(
    State(db): State<Database>,
    Path(id): Path<String>,
) -> Result<Response, WebError> {
    let exercise = services::get_exercise(db.pool(), &id).await?;

    Ok(Json(exercise).into_response())
}
