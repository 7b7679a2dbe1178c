use std::collections::HashSet;
use std::path::Path;

use sqlx::PgPool;
use storage::{models::Exercise, repository::exercise::ExerciseRepository};

use crate::error::{Result, SeederError};

const BUILTIN_LIBRARY: &str = include_str!("../data/exercises.json");

const MAX_ID_LENGTH: usize = 36;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SeedReport {
    pub deleted: u64,
    pub upserted: usize,
}

/// The exercise library shipped with the application
pub fn builtin_exercises() -> Result<Vec<Exercise>> {
    parse_library(BUILTIN_LIBRARY)
}

/// Read a JSON array of exercises
pub async fn load_from_file(path: &Path) -> Result<Vec<Exercise>> {
    let content = tokio::fs::read_to_string(path).await?;
    parse_library(&content)
}

fn parse_library(json: &str) -> Result<Vec<Exercise>> {
    let exercises: Vec<Exercise> = serde_json::from_str(json)?;
    validate_library(&exercises)?;
    Ok(exercises)
}

fn validate_library(exercises: &[Exercise]) -> Result<()> {
    let mut seen = HashSet::new();

    for exercise in exercises {
        let id = exercise.exercise_id.as_str();

        if id.trim() != id {
            return Err(SeederError::ValidationError(format!(
                "Exercise id '{id}' has surrounding whitespace"
            )));
        }

        if id.is_empty() || id.len() > MAX_ID_LENGTH {
            return Err(SeederError::ValidationError(format!(
                "Exercise id '{}' must be between 1 and {} characters",
                exercise.exercise_id, MAX_ID_LENGTH
            )));
        }

        if exercise.name.trim().is_empty() {
            return Err(SeederError::ValidationError(format!(
                "Exercise '{id}' has no name"
            )));
        }

        if !seen.insert(id) {
            return Err(SeederError::ValidationError(format!(
                "Duplicate exercise id '{id}'"
            )));
        }
    }

    Ok(())
}

/// Upsert every exercise, optionally clearing the library first.
/// Clearing also removes the exercises from every workout.
pub async fn seed(pool: &PgPool, exercises: &[Exercise], fresh: bool) -> Result<SeedReport> {
    let repo = ExerciseRepository::new(pool);
    let mut report = SeedReport::default();

    if fresh {
        tracing::info!("Deleting all exercises...");
        report.deleted = repo.delete_all().await?;
        tracing::info!("Deleted {} exercises", report.deleted);
    }

    for exercise in exercises {
        repo.upsert(exercise).await?;
        tracing::debug!(
            exercise_id = %exercise.exercise_id,
            muscle_group = %exercise.muscle_group,
            "Seeded {}",
            exercise.name
        );
        report.upserted += 1;
    }

    Ok(report)
}
