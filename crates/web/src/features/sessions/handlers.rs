use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::session::{SessionResponse, StartSessionRequest, UpdateSetRequest},
};
use uuid::Uuid;
use validator::Validate;

use super::{registry::SessionRegistry, services};
use crate::error::WebError;

#[utoipa::path(
    post,
    path = "/api/sessions",
    request_body = StartSessionRequest,
    responses(
        (status = 201, description = "Session started", body = SessionResponse),
        (status = 404, description = "Workout not found"),
        (status = 409, description = "Workout has no exercises")
    ),
    tag = "sessions"
)]
pub async fn start_session(
    State(db): State<Database>,
    State(registry): State<SessionRegistry>,
    Json(req): Json<StartSessionRequest>,
) -> Result<Response, WebError> {
    let session = services::start_session(db.pool(), &registry, req.workout_id).await?;

    Ok((StatusCode::CREATED, Json(session)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Current session state", body = SessionResponse),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn get_session(
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let session = services::get_session(&registry, id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/complete-set",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Set completed; the last set stores the workout", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is not in progress")
    ),
    tag = "sessions"
)]
pub async fn complete_set(
    State(db): State<Database>,
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let session = services::complete_set(db.pool(), &registry, id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/skip-rest",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Rest ended", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is finished")
    ),
    tag = "sessions"
)]
pub async fn skip_rest(
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let session = services::skip_rest(&registry, id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/previous",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Moved to the previous set", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Already at the first set")
    ),
    tag = "sessions"
)]
pub async fn previous_set(
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let session = services::previous_set(&registry, id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/next",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Moved to the next set", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Already at the last set")
    ),
    tag = "sessions"
)]
pub async fn next_set(
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let session = services::next_set(&registry, id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/pause",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Clock and rest countdown paused", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is finished")
    ),
    tag = "sessions"
)]
pub async fn pause(
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let session = services::pause(&registry, id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/resume",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Clock and rest countdown resumed", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is finished")
    ),
    tag = "sessions"
)]
pub async fn resume(
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let session = services::resume(&registry, id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    patch,
    path = "/api/sessions/{id}/exercises/{exercise_index}/sets/{set_index}",
    params(
        ("id" = Uuid, Path, description = "Session id"),
        ("exercise_index" = usize, Path, description = "Position of the exercise in the workout"),
        ("set_index" = usize, Path, description = "Position of the set in the exercise")
    ),
    request_body = UpdateSetRequest,
    responses(
        (status = 200, description = "Set data updated", body = SessionResponse),
        (status = 400, description = "Validation error or unknown set"),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is finished")
    ),
    tag = "sessions"
)]
pub async fn update_set(
    State(registry): State<SessionRegistry>,
    Path((id, exercise_index, set_index)): Path<(Uuid, usize, usize)>,
    Json(req): Json<UpdateSetRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let session = services::update_set(&registry, id, exercise_index, set_index, &req).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    post,
    path = "/api/sessions/{id}/cancel",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 200, description = "Session canceled", body = SessionResponse),
        (status = 404, description = "Session not found"),
        (status = 409, description = "Session is finished")
    ),
    tag = "sessions"
)]
pub async fn cancel(
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    let session = services::cancel(&registry, id).await?;

    Ok(Json(session).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/sessions/{id}",
    params(
        ("id" = Uuid, Path, description = "Session id")
    ),
    responses(
        (status = 204, description = "Session discarded"),
        (status = 404, description = "Session not found")
    ),
    tag = "sessions"
)]
pub async fn discard_session(
    State(registry): State<SessionRegistry>,
    Path(id): Path<Uuid>,
) -> Result<Response, WebError> {
    services::discard(&registry, id).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}
