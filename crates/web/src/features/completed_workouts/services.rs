use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::completed_workout::{CompletedWorkoutFilter, RecordCompletedWorkoutRequest},
    error::Result,
    models::CompletedWorkout,
    repository::completed_workout::CompletedWorkoutRepository,
};
use uuid::Uuid;

pub async fn list_completed_workouts(
    pool: &PgPool,
    filter: &CompletedWorkoutFilter,
) -> Result<Vec<CompletedWorkout>> {
    let repo = CompletedWorkoutRepository::new(pool);
    let since = filter.period.map(|period| period.start(Utc::now()));

    repo.list(since).await
}

pub async fn record_completed_workout(
    pool: &PgPool,
    request: &RecordCompletedWorkoutRequest,
) -> Result<CompletedWorkout> {
    let repo = CompletedWorkoutRepository::new(pool);
    repo.create(request).await
}

pub async fn get_completed_workout(pool: &PgPool, id: Uuid) -> Result<CompletedWorkout> {
    let repo = CompletedWorkoutRepository::new(pool);
    repo.find_by_id(id).await
}
