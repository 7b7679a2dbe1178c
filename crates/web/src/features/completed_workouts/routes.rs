use axum::{Router, routing::get};

use super::handlers::{get_completed_workout, list_completed_workouts, record_completed_workout};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(list_completed_workouts).post(record_completed_workout),
        )
        .route("/:id", get(get_completed_workout))
}
