use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::{DIFFICULTIES, Workout, WorkoutExerciseDetail};

pub const DEFAULT_SETS: i32 = 3;
pub const DEFAULT_REPS: i32 = 10;
pub const DEFAULT_REST_TIME: i32 = 60;

fn default_sets() -> i32 {
    DEFAULT_SETS
}

fn default_reps() -> i32 {
    DEFAULT_REPS
}

fn default_rest_time() -> i32 {
    DEFAULT_REST_TIME
}

/// Per-workout parameters for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate, ToSchema)]
pub struct WorkoutExerciseInput {
    #[validate(length(min = 1, max = 36, message = "Exercise id is required"))]
    pub exercise_id: String,

    #[serde(default = "default_sets")]
    #[validate(range(min = 1, message = "Sets must be at least 1"))]
    pub sets: i32,

    #[serde(default = "default_reps")]
    #[validate(range(min = 1, message = "Reps must be at least 1"))]
    pub reps: i32,

    #[serde(default = "default_rest_time")]
    #[validate(range(min = 0, message = "Rest time cannot be negative"))]
    pub rest_time: i32,

    pub weight: Option<Decimal>,

    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: Option<i32>,

    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub display_order: Option<i32>,
}

impl WorkoutExerciseInput {
    pub fn new(exercise_id: impl Into<String>) -> Self {
        Self {
            exercise_id: exercise_id.into(),
            sets: DEFAULT_SETS,
            reps: DEFAULT_REPS,
            rest_time: DEFAULT_REST_TIME,
            weight: None,
            duration: None,
            display_order: None,
        }
    }

    /// Explicit order, or `fallback` when the order is absent or zero
    pub fn display_order_or(&self, fallback: i32) -> i32 {
        self.display_order
            .filter(|order| *order > 0)
            .unwrap_or(fallback)
    }
}

/// Request payload for creating a new workout
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateWorkoutRequest {
    #[validate(length(
        min = 1,
        max = 256,
        message = "Name must be between 1 and 256 characters"
    ))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: String,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,

    #[serde(default)]
    #[validate(nested)]
    pub exercises: Vec<WorkoutExerciseInput>,
}

/// Request payload for updating an existing workout.
///
/// Absent fields keep their stored value; an empty `description` clears it.
/// `exercises` are appended and `exercises_to_delete` lists exercise ids to
/// drop. `exercises_to_update` replace the parameters of entries already
/// present, so a missing weight or duration clears the stored one.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkoutRequest {
    #[validate(length(min = 1, max = 256))]
    #[validate(custom(function = "validate_not_blank"))]
    pub name: Option<String>,

    pub description: Option<String>,

    #[validate(range(min = 0))]
    pub duration: Option<i32>,

    #[validate(custom(function = "validate_difficulty"))]
    pub difficulty: Option<String>,

    #[validate(nested)]
    pub exercises: Option<Vec<WorkoutExerciseInput>>,

    #[validate(nested)]
    pub exercises_to_update: Option<Vec<WorkoutExerciseInput>>,

    pub exercises_to_delete: Option<Vec<String>>,
}

/// Partial update of a single workout entry
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate, ToSchema)]
pub struct UpdateWorkoutExerciseRequest {
    #[validate(range(min = 1, message = "Sets must be at least 1"))]
    pub sets: Option<i32>,

    #[validate(range(min = 1, message = "Reps must be at least 1"))]
    pub reps: Option<i32>,

    #[validate(range(min = 0, message = "Rest time cannot be negative"))]
    pub rest_time: Option<i32>,

    pub weight: Option<Decimal>,

    #[validate(range(min = 0, message = "Duration cannot be negative"))]
    pub duration: Option<i32>,

    #[validate(range(min = 0, message = "Order cannot be negative"))]
    pub display_order: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutCreatedResponse {
    pub id: Uuid,
}

/// Workout with its exercises in display order
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct WorkoutDetailResponse {
    #[serde(flatten)]
    pub workout: Workout,
    pub exercises: Vec<WorkoutExerciseDetail>,
}

fn validate_not_blank(value: &str) -> Result<(), validator::ValidationError> {
    if value.trim().is_empty() {
        let mut error = validator::ValidationError::new("blank");
        error.message = Some("Name cannot be blank".into());
        return Err(error);
    }

    Ok(())
}

fn validate_difficulty(difficulty: &str) -> Result<(), validator::ValidationError> {
    if DIFFICULTIES.contains(&difficulty) {
        Ok(())
    } else {
        Err(validator::ValidationError::new("invalid_difficulty"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exercise_input_defaults() {
        let input: WorkoutExerciseInput =
            serde_json::from_str(r#"{"exercise_id": "1"}"#).unwrap();

        assert_eq!(input.sets, DEFAULT_SETS);
        assert_eq!(input.reps, DEFAULT_REPS);
        assert_eq!(input.rest_time, DEFAULT_REST_TIME);
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_display_order_falls_back_to_index() {
        let mut input = WorkoutExerciseInput::new("1");
        assert_eq!(input.display_order_or(4), 4);

        input.display_order = Some(0);
        assert_eq!(input.display_order_or(4), 4);

        input.display_order = Some(7);
        assert_eq!(input.display_order_or(4), 7);
    }

    #[test]
    fn test_create_request_rejects_blank_name() {
        let request = CreateWorkoutRequest {
            name: "   ".to_string(),
            description: None,
            duration: None,
            difficulty: None,
            exercises: vec![],
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_create_request_rejects_zero_sets() {
        let mut exercise = WorkoutExerciseInput::new("1");
        exercise.sets = 0;

        let request = CreateWorkoutRequest {
            name: "Push day".to_string(),
            description: None,
            duration: None,
            difficulty: None,
            exercises: vec![exercise],
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_difficulty_validation() {
        let mut request = UpdateWorkoutRequest {
            difficulty: Some("advanced".to_string()),
            ..Default::default()
        };
        assert!(request.validate().is_ok());

        request.difficulty = Some("extreme".to_string());
        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("difficulty"));
    }
}
