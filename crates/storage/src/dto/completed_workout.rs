use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::stats::Period;
use crate::models::CompletedExercise;

/// Request payload for recording a finished workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RecordCompletedWorkoutRequest {
    pub workout_id: Option<Uuid>,

    #[validate(length(
        min = 1,
        max = 256,
        message = "Name must be between 1 and 256 characters"
    ))]
    pub name: String,

    pub description: Option<String>,

    /// Defaults to the time the request is stored
    pub completed_at: Option<DateTime<Utc>>,

    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration_seconds: i32,

    #[validate(nested)]
    pub exercises: Vec<CompletedExercise>,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CompletedWorkoutFilter {
    /// Only return workouts completed within this period
    pub period: Option<Period>,
}
