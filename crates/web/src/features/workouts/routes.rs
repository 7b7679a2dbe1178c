use axum::{
    Router,
    routing::{get, put},
};

use super::handlers::{
    add_exercise, create_workout, delete_workout, get_workout, list_workout_exercises,
    list_workouts, remove_exercise, update_exercise, update_workout,
};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_workouts).post(create_workout))
        .route(
            "/:id",
            get(get_workout).put(update_workout).delete(delete_workout),
        )
        .route(
            "/:id/exercises",
            get(list_workout_exercises).post(add_exercise),
        )
        .route(
            "/:id/exercises/:exercise_id",
            put(update_exercise).delete(remove_exercise),
        )
}
