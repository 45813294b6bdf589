use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the SQLite database file. Created on first start.
    pub database_path: String,
    pub port: u16,
    pub rust_log: String,
    /// When set, seed this many deterministic mock jobs at startup before serving.
    pub seed_mock_jobs: Option<usize>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            database_path: std::env::var("DATABASE_PATH")
                .unwrap_or_else(|_| "jobs.db".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            seed_mock_jobs: match std::env::var("SEED_MOCK_JOBS") {
                Ok(raw) => Some(
                    raw.parse::<usize>()
                        .context("SEED_MOCK_JOBS must be a non-negative integer")?,
                ),
                Err(_) => None,
            },
        })
    }
}
