use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::dto::workout::{
    CreateWorkoutRequest, UpdateWorkoutExerciseRequest, UpdateWorkoutRequest,
    WorkoutExerciseInput,
};
use crate::error::{Result, StorageError};
use crate::models::{Workout, WorkoutExercise, WorkoutExerciseDetail};

const WORKOUT_COLUMNS: &str =
    "workout_id, name, description, duration, difficulty, created_at, updated_at";

const ENTRY_COLUMNS: &str = "workout_exercise_id, workout_id, exercise_id, sets, reps, \
                             rest_time, weight, duration, display_order";

/// Repository for workouts and their `workout_exercises` entries
pub struct WorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> WorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all workouts, most recently updated first
    pub async fn list(&self) -> Result<Vec<Workout>> {
        let workouts = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts ORDER BY updated_at DESC, name"
        ))
        .fetch_all(self.pool)
        .await?;

        Ok(workouts)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Workout> {
        let workout = sqlx::query_as::<_, Workout>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE workout_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(workout)
    }

    /// Exercises of a workout joined with library data, in display order
    pub async fn find_exercises(&self, workout_id: Uuid) -> Result<Vec<WorkoutExerciseDetail>> {
        let exercises = sqlx::query_as::<_, WorkoutExerciseDetail>(
            r#"
            SELECT we.workout_exercise_id, e.exercise_id, e.name, e.muscle_group,
                   e.description, e.tutorial_url, e.image_url,
                   we.sets, we.reps, we.rest_time, we.weight, we.duration, we.display_order
            FROM workout_exercises we
            JOIN exercises e ON e.exercise_id = we.exercise_id
            WHERE we.workout_id = $1
            ORDER BY we.display_order, e.name
            "#,
        )
        .bind(workout_id)
        .fetch_all(self.pool)
        .await?;

        Ok(exercises)
    }

    /// Create a workout and its entries in one transaction
    pub async fn create(&self, req: &CreateWorkoutRequest) -> Result<Workout> {
        let mut tx = self.pool.begin().await?;

        let workout = sqlx::query_as::<_, Workout>(&format!(
            r#"
            INSERT INTO workouts (workout_id, name, description, duration, difficulty)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(&req.name)
        .bind(&req.description)
        .bind(req.duration)
        .bind(&req.difficulty)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from_write(e, "Workout"))?;

        for (index, exercise) in req.exercises.iter().enumerate() {
            let display_order = exercise.display_order_or(index as i32);
            insert_entry(&mut tx, workout.workout_id, exercise, display_order).await?;
        }

        tx.commit().await?;

        tracing::debug!(
            workout_id = %workout.workout_id,
            exercises = req.exercises.len(),
            "Created workout"
        );

        Ok(workout)
    }

    /// Apply a partial update. Deletions run before additions so an exercise
    /// listed in both ends up present.
    pub async fn update(
        &self,
        id: Uuid,
        existing: &Workout,
        req: &UpdateWorkoutRequest,
    ) -> Result<Workout> {
        let name = req.name.as_ref().unwrap_or(&existing.name);
        let description = req.description.as_ref().or(existing.description.as_ref());
        let duration = req.duration.or(existing.duration);
        let difficulty = req.difficulty.as_ref().or(existing.difficulty.as_ref());

        let mut tx = self.pool.begin().await?;

        let workout = sqlx::query_as::<_, Workout>(&format!(
            r#"
            UPDATE workouts
            SET name = $2,
                description = $3,
                duration = $4,
                difficulty = $5,
                updated_at = NOW()
            WHERE workout_id = $1
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(id)
        .bind(name)
        .bind(description)
        .bind(duration)
        .bind(difficulty)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StorageError::from_write(e, "Workout"))?
        .ok_or(StorageError::NotFound)?;

        if let Some(exercise_ids) = req.exercises_to_delete.as_ref().filter(|ids| !ids.is_empty()) {
            let result = sqlx::query(
                "DELETE FROM workout_exercises WHERE workout_id = $1 AND exercise_id = ANY($2)",
            )
            .bind(id)
            .bind(exercise_ids)
            .execute(&mut *tx)
            .await?;

            tracing::debug!(workout_id = %id, removed = result.rows_affected(), "Removed workout exercises");
        }

        for exercise in req.exercises_to_update.iter().flatten() {
            replace_entry(&mut tx, id, exercise).await?;
        }

        if let Some(additions) = req.exercises.as_ref().filter(|e| !e.is_empty()) {
            let next_order = next_display_order(&mut tx, id).await?;

            for (offset, exercise) in additions.iter().enumerate() {
                let display_order = exercise
                    .display_order
                    .unwrap_or(next_order + offset as i32);
                insert_entry(&mut tx, id, exercise, display_order).await?;
            }
        }

        tx.commit().await?;

        Ok(workout)
    }

    /// Delete a workout; its entries are removed by the foreign key cascade
    pub async fn delete(&self, id: Uuid) -> Result<()> {
        let result = sqlx::query("DELETE FROM workouts WHERE workout_id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        Ok(())
    }

    /// Append an exercise; without an explicit order it goes after the last entry
    pub async fn add_exercise(
        &self,
        workout_id: Uuid,
        exercise: &WorkoutExerciseInput,
    ) -> Result<WorkoutExercise> {
        let mut tx = self.pool.begin().await?;

        touch(&mut tx, workout_id).await?;

        let display_order = match exercise.display_order {
            Some(order) => order,
            None => next_display_order(&mut tx, workout_id).await?,
        };
        let entry = insert_entry(&mut tx, workout_id, exercise, display_order).await?;

        tx.commit().await?;

        Ok(entry)
    }

    pub async fn remove_exercise(&self, workout_id: Uuid, exercise_id: &str) -> Result<()> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            "DELETE FROM workout_exercises WHERE workout_id = $1 AND exercise_id = $2",
        )
        .bind(workout_id)
        .bind(exercise_id)
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Err(StorageError::NotFound);
        }

        touch(&mut tx, workout_id).await?;
        tx.commit().await?;

        Ok(())
    }

    pub async fn update_exercise(
        &self,
        workout_id: Uuid,
        exercise_id: &str,
        req: &UpdateWorkoutExerciseRequest,
    ) -> Result<Vec<WorkoutExercise>> {
        let mut tx = self.pool.begin().await?;

        let entries = update_entry(&mut tx, workout_id, exercise_id, req).await?;
        touch(&mut tx, workout_id).await?;

        tx.commit().await?;

        Ok(entries)
    }
}

async fn insert_entry(
    conn: &mut PgConnection,
    workout_id: Uuid,
    exercise: &WorkoutExerciseInput,
    display_order: i32,
) -> Result<WorkoutExercise> {
    let entry = sqlx::query_as::<_, WorkoutExercise>(&format!(
        r#"
        INSERT INTO workout_exercises (
            workout_exercise_id, workout_id, exercise_id, sets, reps,
            rest_time, weight, duration, display_order
        )
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9)
        RETURNING {ENTRY_COLUMNS}
        "#
    ))
    .bind(Uuid::new_v4())
    .bind(workout_id)
    .bind(&exercise.exercise_id)
    .bind(exercise.sets)
    .bind(exercise.reps)
    .bind(exercise.rest_time)
    .bind(exercise.weight)
    .bind(exercise.duration)
    .bind(display_order)
    .fetch_one(&mut *conn)
    .await
    .map_err(|e| StorageError::from_write(e, "Workout exercise"))?;

    Ok(entry)
}

/// Rewrites every entry of `exercise_id` in the workout; fails when there is none
async fn update_entry(
    conn: &mut PgConnection,
    workout_id: Uuid,
    exercise_id: &str,
    req: &UpdateWorkoutExerciseRequest,
) -> Result<Vec<WorkoutExercise>> {
    let entries = sqlx::query_as::<_, WorkoutExercise>(&format!(
        r#"
        UPDATE workout_exercises
        SET sets = COALESCE($3, sets),
            reps = COALESCE($4, reps),
            rest_time = COALESCE($5, rest_time),
            weight = COALESCE($6, weight),
            duration = COALESCE($7, duration),
            display_order = COALESCE($8, display_order)
        WHERE workout_id = $1 AND exercise_id = $2
        RETURNING {ENTRY_COLUMNS}
        "#
    ))
    .bind(workout_id)
    .bind(exercise_id)
    .bind(req.sets)
    .bind(req.reps)
    .bind(req.rest_time)
    .bind(req.weight)
    .bind(req.duration)
    .bind(req.display_order)
    .fetch_all(&mut *conn)
    .await
    .map_err(|e| StorageError::from_write(e, "Workout exercise"))?;

    if entries.is_empty() {
        return Err(StorageError::NotFound);
    }

    Ok(entries)
}

/// Writes the full parameter set of an entry; absent weight or duration clears it
async fn replace_entry(
    conn: &mut PgConnection,
    workout_id: Uuid,
    exercise: &WorkoutExerciseInput,
) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE workout_exercises
        SET sets = $3,
            reps = $4,
            rest_time = $5,
            weight = $6,
            duration = $7,
            display_order = COALESCE($8, display_order)
        WHERE workout_id = $1 AND exercise_id = $2
        "#,
    )
    .bind(workout_id)
    .bind(&exercise.exercise_id)
    .bind(exercise.sets)
    .bind(exercise.reps)
    .bind(exercise.rest_time)
    .bind(exercise.weight)
    .bind(exercise.duration)
    .bind(exercise.display_order)
    .execute(&mut *conn)
    .await
    .map_err(|e| StorageError::from_write(e, "Workout exercise"))?;

    if result.rows_affected() == 0 {
        return Err(StorageError::NotFound);
    }

    Ok(())
}

async fn next_display_order(conn: &mut PgConnection, workout_id: Uuid) -> Result<i32> {
    let max_order: Option<i32> = sqlx::query_scalar(
        "SELECT MAX(display_order) FROM workout_exercises WHERE workout_id = $1",
    )
    .bind(workout_id)
    .fetch_one(&mut *conn)
    .await?;

    Ok(max_order.map_or(0, |order| order + 1))
}

/// Bump `updated_at`, failing when the workout does not exist
async fn touch(conn: &mut PgConnection, workout_id: Uuid) -> Result<()> {
    let result = sqlx::query("UPDATE workouts SET updated_at = NOW() WHERE workout_id = $1")
        .bind(workout_id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(StorageError::NotFound);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;
    use crate::models::{Exercise, MuscleGroup};
    use crate::repository::exercise::ExerciseRepository;

    async fn seed_exercises(pool: &PgPool, ids: &[&str]) {
        let repo = ExerciseRepository::new(pool);
        for id in ids {
            repo.upsert(&Exercise {
                exercise_id: id.to_string(),
                name: format!("Exercise {id}"),
                muscle_group: MuscleGroup::Legs,
                description: String::new(),
                tutorial_url: None,
                image_url: None,
            })
            .await
            .unwrap();
        }
    }

    fn create_request(ids: &[&str]) -> CreateWorkoutRequest {
        CreateWorkoutRequest {
            name: "Leg day".to_string(),
            description: Some("Heavy".to_string()),
            duration: Some(45),
            difficulty: Some("intermediate".to_string()),
            exercises: ids.iter().map(|id| WorkoutExerciseInput::new(*id)).collect(),
        }
    }

    async fn entry_count(pool: &PgPool, workout_id: Uuid) -> i64 {
        sqlx::query_scalar("SELECT COUNT(*) FROM workout_exercises WHERE workout_id = $1")
            .bind(workout_id)
            .fetch_one(pool)
            .await
            .unwrap()
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_created_workout_can_be_fetched(pool: PgPool) {
        seed_exercises(&pool, &["1", "2"]).await;
        let repo = WorkoutRepository::new(&pool);

        let created = repo.create(&create_request(&["2", "1"])).await.unwrap();
        let found = repo.find_by_id(created.workout_id).await.unwrap();
        assert_eq!(found.name, "Leg day");
        assert_eq!(found.description.as_deref(), Some("Heavy"));

        let exercises = repo.find_exercises(created.workout_id).await.unwrap();
        let ids: Vec<&str> = exercises.iter().map(|e| e.exercise_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
        assert_eq!(exercises[1].display_order, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_create_with_unknown_exercise_is_rejected(pool: PgPool) {
        let repo = WorkoutRepository::new(&pool);

        let err = repo.create(&create_request(&["missing"])).await.unwrap_err();
        assert!(matches!(err, StorageError::ConstraintViolation(_)));
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_delete_removes_entries(pool: PgPool) {
        seed_exercises(&pool, &["1", "2"]).await;
        let repo = WorkoutRepository::new(&pool);
        let created = repo.create(&create_request(&["1", "2"])).await.unwrap();

        repo.delete(created.workout_id).await.unwrap();

        assert!(matches!(
            repo.find_by_id(created.workout_id).await,
            Err(StorageError::NotFound)
        ));
        assert_eq!(entry_count(&pool, created.workout_id).await, 0);
        assert!(matches!(
            repo.delete(created.workout_id).await,
            Err(StorageError::NotFound)
        ));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_update_applies_deletions_updates_and_additions(pool: PgPool) {
        seed_exercises(&pool, &["1", "2", "3"]).await;
        let repo = WorkoutRepository::new(&pool);

        let mut request = create_request(&["1", "2"]);
        request.exercises[1].weight = Some(Decimal::new(1000, 1));
        request.exercises[1].duration = Some(30);
        let existing = repo.create(&request).await.unwrap();

        let mut updated_entry = WorkoutExerciseInput::new("2");
        updated_entry.sets = 5;
        updated_entry.display_order = Some(0);

        let update = UpdateWorkoutRequest {
            description: Some(String::new()),
            exercises: Some(vec![WorkoutExerciseInput::new("3")]),
            exercises_to_update: Some(vec![updated_entry]),
            exercises_to_delete: Some(vec!["1".to_string()]),
            ..Default::default()
        };
        let workout = repo
            .update(existing.workout_id, &existing, &update)
            .await
            .unwrap();

        assert_eq!(workout.name, "Leg day");
        assert_eq!(workout.description.as_deref(), Some(""));
        assert_eq!(workout.duration, Some(45));

        let exercises = repo.find_exercises(existing.workout_id).await.unwrap();
        let ids: Vec<&str> = exercises.iter().map(|e| e.exercise_id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);

        let second = &exercises[0];
        assert_eq!(second.sets, 5);
        assert_eq!(second.weight, None);
        assert_eq!(second.duration, None);

        // Appended after the highest order left once "1" is gone
        assert_eq!(exercises[1].display_order, 1);
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_add_exercise_goes_after_last_entry(pool: PgPool) {
        seed_exercises(&pool, &["1", "2", "3"]).await;
        let repo = WorkoutRepository::new(&pool);
        let workout = repo.create(&create_request(&["1", "2"])).await.unwrap();

        let entry = repo
            .add_exercise(workout.workout_id, &WorkoutExerciseInput::new("3"))
            .await
            .unwrap();
        assert_eq!(entry.display_order, 2);

        let missing = repo
            .add_exercise(Uuid::new_v4(), &WorkoutExerciseInput::new("3"))
            .await;
        assert!(matches!(missing, Err(StorageError::NotFound)));
    }

    #[sqlx::test(migrations = "./migrations")]
    async fn test_partial_entry_update_keeps_other_fields(pool: PgPool) {
        seed_exercises(&pool, &["1"]).await;
        let repo = WorkoutRepository::new(&pool);

        let mut request = create_request(&["1"]);
        request.exercises[0].weight = Some(Decimal::new(600, 1));
        let workout = repo.create(&request).await.unwrap();

        let patch = UpdateWorkoutExerciseRequest {
            reps: Some(12),
            ..Default::default()
        };
        let entries = repo
            .update_exercise(workout.workout_id, "1", &patch)
            .await
            .unwrap();

        assert_eq!(entries[0].reps, 12);
        assert_eq!(entries[0].sets, 3);
        assert_eq!(entries[0].weight, Some(Decimal::new(600, 1)));

        repo.remove_exercise(workout.workout_id, "1").await.unwrap();
        assert_eq!(entry_count(&pool, workout.workout_id).await, 0);
    }
}
