use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use thiserror::Error;
use utoipa::ToSchema;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ToSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum MuscleGroup {
    Chest,
    Back,
    Legs,
    Shoulders,
    Arms,
    Core,
    Cardio,
    #[serde(rename = "full body")]
    FullBody,
}

impl MuscleGroup {
    pub const ALL: [MuscleGroup; 8] = [
        Self::Chest,
        Self::Back,
        Self::Legs,
        Self::Shoulders,
        Self::Arms,
        Self::Core,
        Self::Cardio,
        Self::FullBody,
    ];

    /// Value stored in the `muscle_group` column
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Chest => "chest",
            Self::Back => "back",
            Self::Legs => "legs",
            Self::Shoulders => "shoulders",
            Self::Arms => "arms",
            Self::Core => "core",
            Self::Cardio => "cardio",
            Self::FullBody => "full body",
        }
    }
}

impl fmt::Display for MuscleGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown muscle group: {0}")]
pub struct ParseMuscleGroupError(pub String);

impl FromStr for MuscleGroup {
    type Err = ParseMuscleGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['_', '-'], " ");

        Self::ALL
            .into_iter()
            .find(|group| group.as_str() == normalized)
            .ok_or_else(|| ParseMuscleGroupError(s.to_string()))
    }
}

impl TryFrom<String> for MuscleGroup {
    type Error = ParseMuscleGroupError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Library entry. Exercises are reference data and never change through the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Exercise {
    pub exercise_id: String,
    pub name: String,
    #[sqlx(try_from = "String")]
    pub muscle_group: MuscleGroup,
    pub description: String,
    pub tutorial_url: Option<String>,
    pub image_url: Option<String>,
}
