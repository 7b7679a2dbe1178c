use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use super::MuscleGroup;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompletedSet {
    #[validate(range(min = 0, message = "Reps cannot be negative"))]
    pub reps: i32,
    pub weight: Option<Decimal>,
    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: Option<i32>,
}

/// Snapshot of a planned exercise together with what was actually performed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct CompletedExercise {
    #[validate(length(min = 1, max = 36))]
    pub exercise_id: String,
    #[validate(length(min = 1, max = 256))]
    pub name: String,
    pub muscle_group: MuscleGroup,
    #[validate(range(min = 1))]
    pub sets: i32,
    #[validate(range(min = 1))]
    pub reps: i32,
    #[validate(range(min = 0))]
    pub rest_time: i32,
    pub weight: Option<Decimal>,
    pub duration: Option<i32>,
    #[validate(nested)]
    pub completed_sets: Vec<CompletedSet>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CompletedWorkout {
    pub completed_workout_id: Uuid,
    /// Cleared when the source workout is deleted
    pub workout_id: Option<Uuid>,
    pub name: String,
    pub description: Option<String>,
    pub completed_at: DateTime<Utc>,
    pub duration_seconds: i32,
    pub exercises: Vec<CompletedExercise>,
}
