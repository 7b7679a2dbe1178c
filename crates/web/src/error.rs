use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;
use storage::error::StorageError;
use storage::services::session::SessionError;
use validator::{ValidationErrors, ValidationErrorsKind};

/// Web layer errors
#[derive(Debug)]
pub enum WebError {
    Storage(StorageError),
    Validation(ValidationErrors),
    Session(SessionError),
    NotFound(String),
}

impl fmt::Display for WebError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Storage(e) => write!(f, "Storage error: {}", e),
            Self::Validation(e) => write!(f, "Validation error: {}", e),
            Self::Session(e) => write!(f, "Session error: {}", e),
            Self::NotFound(msg) => write!(f, "Not found: {}", msg),
        }
    }
}

impl WebError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Storage(StorageError::NotFound) => StatusCode::NOT_FOUND,
            Self::Storage(StorageError::ConstraintViolation(_)) => StatusCode::CONFLICT,
            Self::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Session(SessionError::SetOutOfRange { .. }) => StatusCode::BAD_REQUEST,
            Self::Session(_) => StatusCode::CONFLICT,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for WebError {
    fn into_response(self) -> Response {
        let status_code = self.status_code();

        let body = match &self {
            Self::Storage(StorageError::NotFound) => {
                json!({
                    "error": "Resource not found"
                })
            }
            Self::Storage(StorageError::ConstraintViolation(msg)) => {
                json!({
                    "error": msg
                })
            }
            Self::Storage(e) => {
                tracing::error!("Storage error: {:?}", e);
                json!({
                    "error": "An internal error occurred"
                })
            }
            Self::Validation(errors) => {
                let mut details = Vec::new();
                collect_field_errors(errors, "", &mut details);
                details.sort();

                json!({
                    "error": "Validation failed",
                    "details": details
                })
            }
            Self::Session(e) => {
                json!({
                    "error": e.to_string()
                })
            }
            Self::NotFound(msg) => {
                json!({
                    "error": msg
                })
            }
        };

        (status_code, Json(body)).into_response()
    }
}

/// Flattens nested struct and list errors into `path.to.field: message` lines
fn collect_field_errors(errors: &ValidationErrors, prefix: &str, out: &mut Vec<String>) {
    for (field, kind) in errors.errors() {
        let path = if prefix.is_empty() {
            field.to_string()
        } else {
            format!("{prefix}.{field}")
        };

        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                out.extend(field_errors.iter().map(|e| {
                    format!(
                        "{}: {}",
                        path,
                        e.message
                            .as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| e.code.to_string())
                    )
                }));
            }
            ValidationErrorsKind::Struct(nested) => collect_field_errors(nested, &path, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect_field_errors(nested, &format!("{path}[{index}]"), out);
                }
            }
        }
    }
}

impl From<StorageError> for WebError {
    fn from(error: StorageError) -> Self {
        Self::Storage(error)
    }
}

impl From<ValidationErrors> for WebError {
    fn from(error: ValidationErrors) -> Self {
        Self::Validation(error)
    }
}

impl From<SessionError> for WebError {
    fn from(error: SessionError) -> Self {
        Self::Session(error)
    }
}

pub type WebResult<T> = Result<T, WebError>;

#[cfg(test)]
mod tests {
    use storage::dto::workout::{CreateWorkoutRequest, WorkoutExerciseInput};
    use validator::Validate;

    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            WebError::Storage(StorageError::NotFound).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            WebError::Storage(StorageError::ConstraintViolation("x".into())).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            WebError::Storage(StorageError::Database(sqlx::Error::PoolTimedOut)).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            WebError::Session(SessionError::Finished).status_code(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            WebError::Session(SessionError::SetOutOfRange {
                exercise_index: 0,
                set_index: 9
            })
            .status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_nested_validation_errors_are_flattened() {
        let mut exercise = WorkoutExerciseInput::new("1");
        exercise.reps = 0;

        let request = CreateWorkoutRequest {
            name: "Leg day".to_string(),
            description: None,
            duration: None,
            difficulty: None,
            exercises: vec![WorkoutExerciseInput::new("2"), exercise],
        };
        let errors = request.validate().unwrap_err();

        let mut details = Vec::new();
        collect_field_errors(&errors, "", &mut details);

        assert_eq!(details, vec!["exercises[1].reps: Reps must be at least 1"]);
    }
}
