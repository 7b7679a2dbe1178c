use axum::{Router, routing::get};

use super::handlers::{get_exercise, list_exercises};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_exercises))
        .route("/:id", get(get_exercise))
}
