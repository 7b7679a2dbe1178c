use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use storage::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seed")]
#[command(about = "Load the exercise library into the database", long_about = None)]
#[command(version)]
struct Cli {
    /// Delete every exercise before seeding
    #[arg(long)]
    fresh: bool,

    /// JSON array of exercises to load instead of the built-in library
    #[arg(long)]
    file: Option<PathBuf>,

    #[arg(long, env = "DATABASE_URL")]
    database_url: String,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("seed={},seeder={}", log_level, log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let exercises = match &cli.file {
        Some(path) => {
            tracing::info!("Loading exercises from: {}", path.display());
            seeder::load_from_file(path)
                .await
                .with_context(|| format!("Failed to load {}", path.display()))?
        }
        None => seeder::builtin_exercises().context("Built-in exercise library is invalid")?,
    };

    let pool = PgPoolOptions::new()
        .max_connections(1)
        .connect(&cli.database_url)
        .await
        .context("Failed to connect to database")?;

    Database::from_pool(pool.clone())
        .run_migrations()
        .await
        .context("Failed to run migrations")?;

    tracing::info!("Seeding {} exercises...", exercises.len());
    let report = seeder::seed(&pool, &exercises, cli.fresh)
        .await
        .context("Failed to seed exercises")?;

    tracing::info!("Seeded {} exercises", report.upserted);

    Ok(())
}
