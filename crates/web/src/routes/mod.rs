use std::time::Duration;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::features::{completed_workouts, exercises, sessions, stats, workouts};
use crate::state::AppState;

pub fn router(state: AppState) -> Router {
    let api = Router::new()
        .nest("/exercises", exercises::routes::routes())
        .nest("/workouts", workouts::routes::routes())
        .nest("/sessions", sessions::routes::routes())
        .nest(
            "/completed-workouts",
            completed_workouts::routes::routes(),
        )
        .nest("/stats", stats::routes::routes());

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any)
        .max_age(Duration::from_secs(3600));

    Router::new()
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
