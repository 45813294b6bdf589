use anyhow::Result;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use tracing::info;

/// Creates a SQLite connection pool against the given file, creating the
/// file and the schema if they do not exist yet.
pub async fn create_pool(database_path: &str) -> Result<SqlitePool> {
    info!("Opening SQLite database at {database_path}");

    let options = SqliteConnectOptions::new()
        .filename(database_path)
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await?;

    init_schema(&pool).await?;

    info!("SQLite connection pool established");
    Ok(pool)
}

/// Applies the jobs schema. Idempotent; also used by tests against
/// `sqlite::memory:` pools.
///
/// The autoincrement row id gives `all()` a stable insertion order;
/// `ON CONFLICT(req_id) DO UPDATE` upserts keep it, so a replaced record
/// keeps its original position.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS jobs (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            req_id TEXT NOT NULL UNIQUE,
            title TEXT NOT NULL,
            location TEXT NOT NULL DEFAULT '',
            pay_range TEXT NOT NULL DEFAULT '',
            tech_keywords TEXT NOT NULL DEFAULT '',
            description TEXT NOT NULL DEFAULT '',
            ingested_at TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_jobs_req_id ON jobs(req_id)")
        .execute(pool)
        .await?;

    Ok(())
}
