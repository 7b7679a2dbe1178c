use chrono::{DateTime, Months, TimeDelta, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::models::MuscleGroup;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Period {
    #[default]
    Week,
    Month,
    Year,
}

impl Period {
    /// Earliest completion time included in the period ending at `now`
    pub fn start(&self, now: DateTime<Utc>) -> DateTime<Utc> {
        match self {
            Self::Week => now - TimeDelta::days(7),
            Self::Month => now.checked_sub_months(Months::new(1)).unwrap_or(now),
            Self::Year => now.checked_sub_months(Months::new(12)).unwrap_or(now),
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct StatsFilter {
    /// Period used for the frequency chart (defaults to `week`)
    #[serde(default)]
    pub period: Period,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct FrequencyBucket {
    pub label: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct MuscleGroupCount {
    pub muscle_group: MuscleGroup,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct StatsResponse {
    pub total_workouts: u32,
    pub total_exercises: u32,
    pub total_duration_seconds: i64,
    /// Total duration rendered as `Xh Ym`
    pub total_duration_display: String,
    pub period: Period,
    pub frequency: Vec<FrequencyBucket>,
    /// Largest bucket count, never below 1
    pub max_frequency: u32,
    pub top_muscle_groups: Vec<MuscleGroupCount>,
}
