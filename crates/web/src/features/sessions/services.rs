use sqlx::PgPool;
use storage::{
    dto::session::{SessionResponse, UpdateSetRequest},
    repository::{completed_workout::CompletedWorkoutRepository, workout::WorkoutRepository},
    services::session::{ActiveWorkout, SessionError, SetOutcome},
};
use uuid::Uuid;

use super::registry::{SessionRegistry, SharedWorkout};
use crate::error::{WebError, WebResult};

async fn find_session(registry: &SessionRegistry, session_id: Uuid) -> WebResult<SharedWorkout> {
    registry
        .get(session_id)
        .await
        .ok_or_else(|| WebError::NotFound(format!("Session {session_id} not found")))
}

/// Run one state transition and return the resulting snapshot
async fn apply<F>(registry: &SessionRegistry, session_id: Uuid, op: F) -> WebResult<SessionResponse>
where
    F: FnOnce(&mut ActiveWorkout) -> Result<(), SessionError>,
{
    let workout = find_session(registry, session_id).await?;
    let mut workout = workout.lock().await;

    op(&mut workout)?;

    Ok(workout.snapshot(session_id))
}

/// Load a stored workout and start running it
pub async fn start_session(
    pool: &PgPool,
    registry: &SessionRegistry,
    workout_id: Uuid,
) -> WebResult<SessionResponse> {
    let repo = WorkoutRepository::new(pool);

    let workout = repo.find_by_id(workout_id).await?;
    let exercises = repo.find_exercises(workout_id).await?;

    let mut session = ActiveWorkout::new(&workout, exercises)?;
    session.start()?;

    let (session_id, session) = registry.insert(session).await;
    let snapshot = session.lock().await.snapshot(session_id);

    Ok(snapshot)
}

pub async fn get_session(
    registry: &SessionRegistry,
    session_id: Uuid,
) -> WebResult<SessionResponse> {
    apply(registry, session_id, |_| Ok(())).await
}

/// Completing the final set stores the workout in the history. When storing
/// fails the session keeps the record and the next call retries the save.
pub async fn complete_set(
    pool: &PgPool,
    registry: &SessionRegistry,
    session_id: Uuid,
) -> WebResult<SessionResponse> {
    let workout = find_session(registry, session_id).await?;
    let mut workout = workout.lock().await;

    if let SetOutcome::Finished(record) = workout.complete_set()? {
        let repo = CompletedWorkoutRepository::new(pool);
        let completed = repo.create(&record).await.inspect_err(|e| {
            tracing::error!(%session_id, error = %e, "Failed to store completed workout");
        })?;

        workout.set_completed_workout_id(completed.completed_workout_id);
        tracing::info!(%session_id, completed_workout_id = %completed.completed_workout_id, "Session completed");
    }

    Ok(workout.snapshot(session_id))
}

pub async fn skip_rest(registry: &SessionRegistry, session_id: Uuid) -> WebResult<SessionResponse> {
    apply(registry, session_id, ActiveWorkout::finish_rest).await
}

pub async fn previous_set(
    registry: &SessionRegistry,
    session_id: Uuid,
) -> WebResult<SessionResponse> {
    apply(registry, session_id, ActiveWorkout::previous_set).await
}

pub async fn next_set(registry: &SessionRegistry, session_id: Uuid) -> WebResult<SessionResponse> {
    apply(registry, session_id, ActiveWorkout::next_set).await
}

pub async fn pause(registry: &SessionRegistry, session_id: Uuid) -> WebResult<SessionResponse> {
    apply(registry, session_id, ActiveWorkout::pause).await
}

pub async fn resume(registry: &SessionRegistry, session_id: Uuid) -> WebResult<SessionResponse> {
    apply(registry, session_id, ActiveWorkout::resume).await
}

pub async fn update_set(
    registry: &SessionRegistry,
    session_id: Uuid,
    exercise_index: usize,
    set_index: usize,
    patch: &UpdateSetRequest,
) -> WebResult<SessionResponse> {
    apply(registry, session_id, |workout| {
        workout
            .update_set(exercise_index, set_index, patch)
            .map(|_| ())
    })
    .await
}

pub async fn cancel(registry: &SessionRegistry, session_id: Uuid) -> WebResult<SessionResponse> {
    let snapshot = apply(registry, session_id, ActiveWorkout::cancel).await?;
    tracing::info!(%session_id, "Session canceled");
    Ok(snapshot)
}

pub async fn discard(registry: &SessionRegistry, session_id: Uuid) -> WebResult<()> {
    if registry.remove(session_id).await {
        Ok(())
    } else {
        Err(WebError::NotFound(format!("Session {session_id} not found")))
    }
}
