use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

pub const DIFFICULTIES: &[&str] = &["beginner", "intermediate", "advanced"];

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Workout {
    pub workout_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Estimated duration in minutes
    pub duration: Option<i32>,
    pub difficulty: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
