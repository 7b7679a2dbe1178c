use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::MuscleGroup;

/// Query parameters accepted when listing the exercise library
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ExerciseFilter {
    /// Only return exercises for this muscle group
    pub muscle_group: Option<MuscleGroup>,
    /// Case-insensitive match against name, description or muscle group
    pub search: Option<String>,
}

impl ExerciseFilter {
    pub fn search_term(&self) -> Option<&str> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|term| !term.is_empty())
    }
}
