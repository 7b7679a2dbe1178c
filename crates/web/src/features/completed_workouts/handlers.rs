use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::completed_workout::{CompletedWorkoutFilter, RecordCompletedWorkoutRequest},
    models::CompletedWorkout,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/completed-workouts",
    params(CompletedWorkoutFilter),
    responses(
        (status = 200, description = "Completed workouts, newest first", body = Vec<CompletedWorkout>),
        (status = 400, description = "Unknown period")
    ),
    tag = "completed-workouts"
)]
pub async fn list_completed_workouts(
    State(db): State<Database>,
    Query(filter): Query<CompletedWorkoutFilter>,
) -> Result<Response, WebError> {
    let workouts = services::list_completed_workouts(db.pool(), &filter).await?;

    Ok(Json(workouts).into_response())
}

#[utoipa::path(
    post,
    path = "/api/completed-workouts",
    request_body = RecordCompletedWorkoutRequest,
    responses(
        (status = 201, description = "Completed workout recorded", body = CompletedWorkout),
        (status = 400, description = "Validation error")
    ),
    tag = "completed-workouts"
)]
pub async fn record_completed_workout(
    State(db): State<Database>,
    Json(req): Json<RecordCompletedWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let workout = services::record_completed_workout(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(workout)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/completed-workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Completed workout id")
    ),
    responses(
        (status = 200, description = "Completed workout found", body = CompletedWorkout),
        (status = 404, description = "Completed workout not found")
    ),
    tag = "completed-workouts"
)]
pub async fn get_completed_workout(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let workout = services::get_completed_workout(db.pool(), id).await?;

    Ok(Json(workout).into_response())
}
