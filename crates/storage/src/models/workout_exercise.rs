use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

use super::MuscleGroup;

/// Row of the `workout_exercises` join table
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutExercise {
    pub workout_exercise_id: Uuid,
    pub workout_id: Uuid,
    pub exercise_id: String,
    pub sets: i32,
    pub reps: i32,
    /// Rest between sets, in seconds
    pub rest_time: i32,
    pub weight: Option<Decimal>,
    /// Target duration of a timed set, in seconds
    pub duration: Option<i32>,
    pub display_order: i32,
}

/// A workout entry joined with the library exercise it references
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct WorkoutExerciseDetail {
    pub workout_exercise_id: Uuid,
    pub exercise_id: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub muscle_group: MuscleGroup,
    pub description: String,
    pub tutorial_url: Option<String>,
    pub image_url: Option<String>,
    pub sets: i32,
    pub reps: i32,
    pub rest_time: i32,
    pub weight: Option<Decimal>,
    pub duration: Option<i32>,
    pub display_order: i32,
}
