use sqlx::PgPool;
use storage::{
    dto::workout::{
        CreateWorkoutRequest, UpdateWorkoutExerciseRequest, UpdateWorkoutRequest,
        WorkoutDetailResponse, WorkoutExerciseInput,
    },
    error::Result,
    models::{Workout, WorkoutExercise, WorkoutExerciseDetail},
    repository::workout::WorkoutRepository,
};
use uuid::Uuid;

/// List all workouts
pub async fn list_workouts(pool: &PgPool) -> Result<Vec<Workout>> {
    let repo = WorkoutRepository::new(pool);
    repo.list().await
}

/// Get a workout together with its exercises
pub async fn get_workout(pool: &PgPool, id: Uuid) -> Result<WorkoutDetailResponse> {
    let repo = WorkoutRepository::new(pool);

    let workout = repo.find_by_id(id).await?;
    let exercises = repo.find_exercises(id).await?;

    Ok(WorkoutDetailResponse { workout, exercises })
}

pub async fn create_workout(pool: &PgPool, request: &CreateWorkoutRequest) -> Result<Workout> {
    let repo = WorkoutRepository::new(pool);
    repo.create(request).await
}

pub async fn update_workout(
    pool: &PgPool,
    id: Uuid,
    request: &UpdateWorkoutRequest,
) -> Result<WorkoutDetailResponse> {
    let repo = WorkoutRepository::new(pool);

    let existing = repo.find_by_id(id).await?;
    let workout = repo.update(id, &existing, request).await?;
    let exercises = repo.find_exercises(id).await?;

    Ok(WorkoutDetailResponse { workout, exercises })
}

pub async fn delete_workout(pool: &PgPool, id: Uuid) -> Result<()> {
    let repo = WorkoutRepository::new(pool);
    repo.delete(id).await
}

pub async fn list_workout_exercises(
    pool: &PgPool,
    workout_id: Uuid,
) -> Result<Vec<WorkoutExerciseDetail>> {
    let repo = WorkoutRepository::new(pool);

    repo.find_by_id(workout_id).await?;
    repo.find_exercises(workout_id).await
}

pub async fn add_exercise(
    pool: &PgPool,
    workout_id: Uuid,
    exercise: &WorkoutExerciseInput,
) -> Result<WorkoutExercise> {
    let repo = WorkoutRepository::new(pool);
    repo.add_exercise(workout_id, exercise).await
}

pub async fn update_exercise(
    pool: &PgPool,
    workout_id: Uuid,
    exercise_id: &str,
    request: &UpdateWorkoutExerciseRequest,
) -> Result<Vec<WorkoutExercise>> {
    let repo = WorkoutRepository::new(pool);
    repo.update_exercise(workout_id, exercise_id, request).await
}

pub async fn remove_exercise(pool: &PgPool, workout_id: Uuid, exercise_id: &str) -> Result<()> {
    let repo = WorkoutRepository::new(pool);
    repo.remove_exercise(workout_id, exercise_id).await
}
