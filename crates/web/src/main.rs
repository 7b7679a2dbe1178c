use std::time::Duration;

use anyhow::Context;
use storage::Database;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod routes;
mod state;

use config::Config;
use features::sessions::registry::SessionRegistry;
use features::{completed_workouts, exercises, sessions, stats, workouts};
use state::AppState;

const SESSION_SWEEP_PERIOD: Duration = Duration::from_secs(60);

#[derive(OpenApi)]
#[openapi(
    paths(
        exercises::handlers::list_exercises,
        exercises::handlers::get_exercise,
        workouts::handlers::list_workouts,
        workouts::handlers::get_workout,
        workouts::handlers::create_workout,
        workouts::handlers::update_workout,
        workouts::handlers::delete_workout,
        workouts::handlers::list_workout_exercises,
        workouts::handlers::add_exercise,
        workouts::handlers::update_exercise,
        workouts::handlers::remove_exercise,
        sessions::handlers::start_session,
        sessions::handlers::get_session,
        sessions::handlers::complete_set,
        sessions::handlers::skip_rest,
        sessions::handlers::previous_set,
        sessions::handlers::next_set,
        sessions::handlers::pause,
        sessions::handlers::resume,
        sessions::handlers::update_set,
        sessions::handlers::cancel,
        sessions::handlers::discard_session,
        completed_workouts::handlers::list_completed_workouts,
        completed_workouts::handlers::record_completed_workout,
        completed_workouts::handlers::get_completed_workout,
        stats::handlers::get_stats,
    ),
    components(
        schemas(
            storage::dto::workout::WorkoutExerciseInput,
            storage::dto::workout::CreateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutRequest,
            storage::dto::workout::UpdateWorkoutExerciseRequest,
            storage::dto::workout::WorkoutCreatedResponse,
            storage::dto::workout::WorkoutDetailResponse,
            storage::dto::session::StartSessionRequest,
            storage::dto::session::UpdateSetRequest,
            storage::dto::session::RestState,
            storage::dto::session::SessionResponse,
            storage::dto::completed_workout::RecordCompletedWorkoutRequest,
            storage::dto::stats::Period,
            storage::dto::stats::FrequencyBucket,
            storage::dto::stats::MuscleGroupCount,
            storage::dto::stats::StatsResponse,
            storage::models::Exercise,
            storage::models::MuscleGroup,
            storage::models::Workout,
            storage::models::WorkoutExercise,
            storage::models::WorkoutExerciseDetail,
            storage::models::WorkoutStatus,
            storage::models::CompletedWorkout,
            storage::models::CompletedExercise,
            storage::models::CompletedSet,
        )
    ),
    tags(
        (name = "exercises", description = "Exercise library"),
        (name = "workouts", description = "Workout composition"),
        (name = "sessions", description = "Live workout sessions"),
        (name = "completed-workouts", description = "Workout history"),
        (name = "stats", description = "Training statistics"),
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting workout tracker API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::connect(&config.database_url, config.database_max_connections)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let sessions = SessionRegistry::with_idle_timeout(config.session_idle_timeout);
    sessions.spawn_sweeper(SESSION_SWEEP_PERIOD);

    let app = routes::router(AppState::with_sessions(db, sessions))
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let bind_address = config.bind_address();
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;

    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!(
        "Swagger UI available at http://{}/swagger-ui/",
        bind_address
    );

    axum::serve(listener, app).await?;

    Ok(())
}
