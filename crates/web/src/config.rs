use std::time::Duration;

use anyhow::{Context, Result};
use storage::DEFAULT_MAX_CONNECTIONS;

use crate::features::sessions::registry::DEFAULT_IDLE_TIMEOUT;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub session_idle_timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            host: std::env::var("HOST").context("Cannot load HOST env variable")?,
            port: std::env::var("PORT")
                .context("Cannot load PORT env variable")?
                .parse()
                .context("PORT must be a number")?,
            database_url: std::env::var("DATABASE_URL")
                .context("Cannot load DATABASE_URL env variable")?,
            database_max_connections: match std::env::var("DATABASE_MAX_CONNECTIONS") {
                Ok(value) => value
                    .parse()
                    .context("DATABASE_MAX_CONNECTIONS must be a number")?,
                Err(_) => DEFAULT_MAX_CONNECTIONS,
            },
            session_idle_timeout: match std::env::var("SESSION_IDLE_TIMEOUT_MINUTES") {
                Ok(value) => Duration::from_secs(
                    value
                        .parse::<u64>()
                        .context("SESSION_IDLE_TIMEOUT_MINUTES must be a number")?
                        * 60,
                ),
                Err(_) => DEFAULT_IDLE_TIMEOUT,
            },
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
