use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::workout::{
        CreateWorkoutRequest, UpdateWorkoutExerciseRequest, UpdateWorkoutRequest,
        WorkoutCreatedResponse, WorkoutDetailResponse, WorkoutExerciseInput,
    },
    models::{Workout, WorkoutExercise, WorkoutExerciseDetail},
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/workouts",
    responses(
        (status = 200, description = "List all workouts successfully", body = Vec<Workout>)
    ),
    tag = "workouts"
)]
pub async fn list_workouts(State(db): State<Database>) -> Result<Response, WebError> {
    let workouts = services::list_workouts(db.pool()).await?;

    Ok(Json(workouts).into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Workout with its exercises in display order", body = WorkoutDetailResponse),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn get_workout(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let workout = services::get_workout(db.pool(), id).await?;

    Ok(Json(workout).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts",
    request_body = CreateWorkoutRequest,
    responses(
        (status = 201, description = "Workout created successfully", body = WorkoutCreatedResponse),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Unknown exercise")
    ),
    tag = "workouts"
)]
pub async fn create_workout(
    State(db): State<Database>,
    Json(req): Json<CreateWorkoutRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let workout = services::create_workout(db.pool(), &req).await?;

    Ok((
        StatusCode::CREATED,
        Json(WorkoutCreatedResponse {
            id: workout.workout_id,
        }),
    )
        .into_response())
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    request_body = UpdateWorkoutRequest,
    responses(
        (status = 200, description = "Workout updated successfully", body = WorkoutDetailResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Workout not found"),
        (status = 409, description = "Unknown exercise")
    ),
    tag = "workouts"
)]
pub async fn update_workout(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(update_req): Json<UpdateWorkoutRequest>,
) -> Result<Response, WebError> {
    update_req.validate()?;

    let updated = services::update_workout(db.pool(), id, &update_req).await?;

    Ok(Json(updated).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    responses(
        (status = 204, description = "Workout deleted successfully"),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn delete_workout(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::delete_workout(db.pool(), id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/workouts/{id}/exercises",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    responses(
        (status = 200, description = "Exercises of the workout in display order", body = Vec<WorkoutExerciseDetail>),
        (status = 404, description = "Workout not found")
    ),
    tag = "workouts"
)]
pub async fn list_workout_exercises(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let exercises = services::list_workout_exercises(db.pool(), id).await?;

    Ok(Json(exercises).into_response())
}

#[utoipa::path(
    post,
    path = "/api/workouts/{id}/exercises",
    params(
        ("id" = Uuid, Path, description = "Workout id")
    ),
    request_body = WorkoutExerciseInput,
    responses(
        (status = 201, description = "Exercise added after the last entry unless an order is given", body = WorkoutExercise),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Workout not found"),
        (status = 409, description = "Unknown exercise")
    ),
    tag = "workouts"
)]
pub async fn add_exercise(
    State(db): State<Database>,
    Path(id): Path<Uuid>,
    Json(req): Json<WorkoutExerciseInput>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entry = services::add_exercise(db.pool(), id, &req).await?;

    Ok((StatusCode::CREATED, Json(entry)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/workouts/{id}/exercises/{exercise_id}",
    params(
        ("id" = Uuid, Path, description = "Workout id"),
        ("exercise_id" = String, Path, description = "Exercise id")
    ),
    request_body = UpdateWorkoutExerciseRequest,
    responses(
        (status = 200, description = "Updated entries", body = Vec<WorkoutExercise>),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Exercise is not part of the workout")
    ),
    tag = "workouts"
)]
pub async fn update_exercise(
    State(db): State<Database>,
    Path((id, exercise_id)): Path<(Uuid, String)>,
    Json(req): Json<UpdateWorkoutExerciseRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let entries = services::update_exercise(db.pool(), id, &exercise_id, &req).await?;

    Ok(Json(entries).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/workouts/{id}/exercises/{exercise_id}",
    params(
        ("id" = Uuid, Path, description = "Workout id"),
        ("exercise_id" = String, Path, description = "Exercise id")
    ),
    responses(
        (status = 204, description = "Exercise removed from the workout"),
        (status = 404, description = "Exercise is not part of the workout")
    ),
    tag = "workouts"
)]
pub async fn remove_exercise(
    State(db): State<Database>,
    Path((id, exercise_id)): Path<(Uuid, String)>,
) -> Result<Response, WebError> {
    services::remove_exercise(db.pool(), id, &exercise_id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
