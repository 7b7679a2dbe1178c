use axum::{
    Router,
    routing::{get, patch, post},
};

use super::handlers::{
    cancel, complete_set, discard_session, get_session, next_set, pause, previous_set, resume,
    skip_rest, start_session, update_set,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", post(start_session))
        .route("/:id", get(get_session).delete(discard_session))
        .route("/:id/complete-set", post(complete_set))
        .route("/:id/skip-rest", post(skip_rest))
        .route("/:id/previous", post(previous_set))
        .route("/:id/next", post(next_set))
        .route("/:id/pause", post(pause))
        .route("/:id/resume", post(resume))
        .route("/:id/cancel", post(cancel))
        .route(
            "/:id/exercises/:exercise_index/sets/:set_index",
            patch(update_set),
        )
}
