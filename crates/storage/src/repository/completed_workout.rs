use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::types::Json;
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::dto::completed_workout::RecordCompletedWorkoutRequest;
use crate::error::{Result, StorageError};
use crate::models::{CompletedExercise, CompletedSet, CompletedWorkout, MuscleGroup};

#[derive(Debug, FromRow)]
struct CompletedWorkoutRow {
    completed_workout_id: Uuid,
    workout_id: Option<Uuid>,
    name: String,
    description: Option<String>,
    completed_at: DateTime<Utc>,
    duration_seconds: i32,
}

impl CompletedWorkoutRow {
    fn into_model(self, exercises: Vec<CompletedExercise>) -> CompletedWorkout {
        CompletedWorkout {
            completed_workout_id: self.completed_workout_id,
            workout_id: self.workout_id,
            name: self.name,
            description: self.description,
            completed_at: self.completed_at,
            duration_seconds: self.duration_seconds,
            exercises,
        }
    }
}

#[derive(Debug, FromRow)]
struct CompletedExerciseRow {
    completed_workout_id: Uuid,
    exercise_id: String,
    name: String,
    #[sqlx(try_from = "String")]
    muscle_group: MuscleGroup,
    sets: i32,
    reps: i32,
    rest_time: i32,
    weight: Option<Decimal>,
    duration: Option<i32>,
    completed_sets: Json<Vec<CompletedSet>>,
}

impl From<CompletedExerciseRow> for CompletedExercise {
    fn from(row: CompletedExerciseRow) -> Self {
        Self {
            exercise_id: row.exercise_id,
            name: row.name,
            muscle_group: row.muscle_group,
            sets: row.sets,
            reps: row.reps,
            rest_time: row.rest_time,
            weight: row.weight,
            duration: row.duration,
            completed_sets: row.completed_sets.0,
        }
    }
}

const WORKOUT_COLUMNS: &str =
    "completed_workout_id, workout_id, name, description, completed_at, duration_seconds";

const EXERCISE_COLUMNS: &str = "completed_workout_id, exercise_id, name, muscle_group, sets, \
                                reps, rest_time, weight, duration, completed_sets";

/// History of finished workouts. Records are append-only.
pub struct CompletedWorkoutRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CompletedWorkoutRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, req: &RecordCompletedWorkoutRequest) -> Result<CompletedWorkout> {
        let completed_at = req.completed_at.unwrap_or_else(Utc::now);

        let mut tx = self.pool.begin().await?;

        let row = sqlx::query_as::<_, CompletedWorkoutRow>(&format!(
            r#"
            INSERT INTO completed_workouts (
                completed_workout_id, workout_id, name, description, completed_at, duration_seconds
            )
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {WORKOUT_COLUMNS}
            "#
        ))
        .bind(Uuid::new_v4())
        .bind(req.workout_id)
        .bind(&req.name)
        .bind(&req.description)
        .bind(completed_at)
        .bind(req.duration_seconds)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| StorageError::from_write(e, "Completed workout"))?;

        for (position, exercise) in req.exercises.iter().enumerate() {
            sqlx::query(
                r#"
                INSERT INTO completed_exercises (
                    completed_exercise_id, completed_workout_id, position, exercise_id, name,
                    muscle_group, sets, reps, rest_time, weight, duration, completed_sets
                )
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
                "#,
            )
            .bind(Uuid::new_v4())
            .bind(row.completed_workout_id)
            .bind(position as i32)
            .bind(&exercise.exercise_id)
            .bind(&exercise.name)
            .bind(exercise.muscle_group.as_str())
            .bind(exercise.sets)
            .bind(exercise.reps)
            .bind(exercise.rest_time)
            .bind(exercise.weight)
            .bind(exercise.duration)
            .bind(Json(&exercise.completed_sets))
            .execute(&mut *tx)
            .await
            .map_err(|e| StorageError::from_write(e, "Completed exercise"))?;
        }

        tx.commit().await?;

        tracing::info!(
            completed_workout_id = %row.completed_workout_id,
            exercises = req.exercises.len(),
            duration_seconds = req.duration_seconds,
            "Recorded completed workout"
        );

        Ok(row.into_model(req.exercises.clone()))
    }

    /// Completed workouts, newest first, optionally limited to those finished after `since`
    pub async fn list(&self, since: Option<DateTime<Utc>>) -> Result<Vec<CompletedWorkout>> {
        let rows = sqlx::query_as::<_, CompletedWorkoutRow>(&format!(
            r#"
            SELECT {WORKOUT_COLUMNS}
            FROM completed_workouts
            WHERE $1::timestamptz IS NULL OR completed_at >= $1
            ORDER BY completed_at DESC
            "#
        ))
        .bind(since)
        .fetch_all(self.pool)
        .await?;

        let ids: Vec<Uuid> = rows.iter().map(|row| row.completed_workout_id).collect();
        let mut exercises = self.exercises_for(&ids).await?;

        Ok(rows
            .into_iter()
            .map(|row| {
                let entries = exercises
                    .remove(&row.completed_workout_id)
                    .unwrap_or_default();
                row.into_model(entries)
            })
            .collect())
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<CompletedWorkout> {
        let row = sqlx::query_as::<_, CompletedWorkoutRow>(&format!(
            "SELECT {WORKOUT_COLUMNS} FROM completed_workouts WHERE completed_workout_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        let mut exercises = self.exercises_for(&[id]).await?;
        let entries = exercises.remove(&id).unwrap_or_default();

        Ok(row.into_model(entries))
    }

    async fn exercises_for(&self, ids: &[Uuid]) -> Result<HashMap<Uuid, Vec<CompletedExercise>>> {
        if ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = sqlx::query_as::<_, CompletedExerciseRow>(&format!(
            r#"
            SELECT {EXERCISE_COLUMNS}
            FROM completed_exercises
            WHERE completed_workout_id = ANY($1)
            ORDER BY completed_workout_id, position
            "#
        ))
        .bind(ids)
        .fetch_all(self.pool)
        .await?;

        let mut grouped: HashMap<Uuid, Vec<CompletedExercise>> = HashMap::new();
        for row in rows {
            grouped
                .entry(row.completed_workout_id)
                .or_default()
                .push(row.into());
        }

        Ok(grouped)
    }
}
