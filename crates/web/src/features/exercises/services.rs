use sqlx::PgPool;
use storage::{
    dto::exercise::ExerciseFilter, error::Result, models::Exercise,
    repository::exercise::ExerciseRepository,
};

pub async fn list_exercises(pool: &PgPool, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
    let repo = ExerciseRepository::new(pool);
    repo.list(filter).await
}

pub async fn get_exercise(pool: &PgPool, id: &str) -> Result<Exercise> {
    let repo = ExerciseRepository::new(pool);
    repo.find_by_id(id).await
}
