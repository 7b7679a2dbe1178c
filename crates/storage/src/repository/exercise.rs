use sqlx::{PgPool, QueryBuilder};

use crate::dto::exercise::ExerciseFilter;
use crate::error::{Result, StorageError};
use crate::models::Exercise;

const EXERCISE_COLUMNS: &str =
    "exercise_id, name, muscle_group, description, tutorial_url, image_url";

pub struct ExerciseRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> ExerciseRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List library exercises, optionally narrowed by muscle group and search term
    pub async fn list(&self, filter: &ExerciseFilter) -> Result<Vec<Exercise>> {
        let mut query = QueryBuilder::new(format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE 1=1"
        ));

        if let Some(muscle_group) = filter.muscle_group {
            query.push(" AND muscle_group = ");
            query.push_bind(muscle_group.as_str());
        }

        if let Some(term) = filter.search_term() {
            let pattern = format!("%{}%", escape_like(term));
            query.push(" AND (name ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR description ILIKE ");
            query.push_bind(pattern.clone());
            query.push(" OR muscle_group ILIKE ");
            query.push_bind(pattern);
            query.push(")");
        }

        query.push(" ORDER BY name");

        let exercises = query
            .build_query_as::<Exercise>()
            .fetch_all(self.pool)
            .await?;

        Ok(exercises)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            "SELECT {EXERCISE_COLUMNS} FROM exercises WHERE exercise_id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?
        .ok_or(StorageError::NotFound)?;

        Ok(exercise)
    }

    /// Insert or refresh a library entry
    pub async fn upsert(&self, exercise: &Exercise) -> Result<Exercise> {
        let exercise = sqlx::query_as::<_, Exercise>(&format!(
            r#"
            INSERT INTO exercises ({EXERCISE_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT (exercise_id) DO UPDATE
            SET name = EXCLUDED.name,
                muscle_group = EXCLUDED.muscle_group,
                description = EXCLUDED.description,
                tutorial_url = EXCLUDED.tutorial_url,
                image_url = EXCLUDED.image_url
            RETURNING {EXERCISE_COLUMNS}
            "#
        ))
        .bind(&exercise.exercise_id)
        .bind(&exercise.name)
        .bind(exercise.muscle_group.as_str())
        .bind(&exercise.description)
        .bind(&exercise.tutorial_url)
        .bind(&exercise.image_url)
        .fetch_one(self.pool)
        .await
        .map_err(|e| StorageError::from_write(e, "Exercise"))?;

        Ok(exercise)
    }

    /// Delete every exercise. Workout entries referencing them go too.
    pub async fn delete_all(&self) -> Result<u64> {
        let result = sqlx::query("DELETE FROM exercises")
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}

fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like() {
        assert_eq!(escape_like("bench"), "bench");
        assert_eq!(escape_like("50%"), "50\\%");
        assert_eq!(escape_like("full_body"), "full\\_body");
    }
}
