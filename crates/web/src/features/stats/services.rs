use chrono::Utc;
use sqlx::PgPool;
use storage::{
    dto::stats::{Period, StatsResponse},
    error::Result,
    repository::completed_workout::CompletedWorkoutRepository,
    services::stats,
};

/// Aggregate statistics over every completed workout
pub async fn get_stats(pool: &PgPool, period: Period) -> Result<StatsResponse> {
    let repo = CompletedWorkoutRepository::new(pool);
    let workouts = repo.list(None).await?;

    Ok(stats::summarize(&workouts, period, Utc::now()))
}
