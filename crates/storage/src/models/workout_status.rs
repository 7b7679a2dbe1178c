use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum WorkoutStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
    Canceled,
}

impl WorkoutStatus {
    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Completed | Self::Canceled)
    }
}
