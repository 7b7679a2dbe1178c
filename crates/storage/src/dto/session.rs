use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{CompletedExercise, WorkoutExerciseDetail, WorkoutStatus};

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StartSessionRequest {
    pub workout_id: Uuid,
}

/// Partial set data captured while the workout is running
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateSetRequest {
    #[validate(range(min = 0, message = "Reps cannot be negative"))]
    pub reps: Option<i32>,

    pub weight: Option<Decimal>,

    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: Option<i32>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct RestState {
    pub duration: u32,
    pub remaining: u32,
    pub paused: bool,
    pub progress_percent: f64,
}

/// Point-in-time view of a running workout
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SessionResponse {
    pub session_id: Uuid,
    pub workout_id: Uuid,
    pub workout_name: String,
    pub status: WorkoutStatus,
    pub exercise_index: usize,
    pub set_index: usize,
    pub total_exercises: usize,
    pub current_exercise: Option<WorkoutExerciseDetail>,
    pub resting: bool,
    pub rest: Option<RestState>,
    pub elapsed_seconds: u32,
    /// Elapsed time rendered as `MM:SS`
    pub elapsed_display: String,
    pub timer_running: bool,
    pub progress_percent: f64,
    pub is_first_set: bool,
    pub is_last_set: bool,
    pub upcoming: Vec<WorkoutExerciseDetail>,
    pub completed_exercises: Vec<CompletedExercise>,
    /// Set once the finished workout has been stored
    pub completed_workout_id: Option<Uuid>,
}
