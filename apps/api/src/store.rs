#![allow(dead_code)]

//! Record Store: a durable table of job postings keyed by requisition id.
//!
//! The store is an explicit object handed to the query service at
//! construction; nothing here is a global. All writes go through `upsert`,
//! which is a single atomic statement, so a concurrent scan never observes
//! a half-written record.

use sqlx::SqlitePool;

use crate::errors::AppError;
use crate::models::JobRecord;

const RECORD_COLUMNS: &str =
    "req_id, title, location, pay_range, tech_keywords, description, ingested_at";

#[derive(Clone)]
pub struct JobStore {
    pool: SqlitePool,
}

impl JobStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Inserts the record, or replaces the existing record with the same
    /// `req_id` wholesale. Last writer wins; SQLite serializes the writes.
    pub async fn upsert(&self, job: &JobRecord) -> Result<(), AppError> {
        if job.req_id.trim().is_empty() {
            return Err(AppError::Validation("req_id must not be empty".to_string()));
        }
        if job.title.trim().is_empty() {
            return Err(AppError::Validation(format!(
                "title must not be empty (req_id {})",
                job.req_id
            )));
        }

        sqlx::query(
            r#"
            INSERT INTO jobs (req_id, title, location, pay_range, tech_keywords, description, ingested_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ON CONFLICT(req_id) DO UPDATE SET
                title = excluded.title,
                location = excluded.location,
                pay_range = excluded.pay_range,
                tech_keywords = excluded.tech_keywords,
                description = excluded.description,
                ingested_at = excluded.ingested_at
            "#,
        )
        .bind(&job.req_id)
        .bind(&job.title)
        .bind(&job.location)
        .bind(&job.pay_range)
        .bind(&job.tech_keywords)
        .bind(&job.description)
        .bind(job.ingested_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn get(&self, req_id: &str) -> Result<JobRecord, AppError> {
        let row: Option<JobRecord> = sqlx::query_as(&format!(
            "SELECT {RECORD_COLUMNS} FROM jobs WHERE req_id = ?"
        ))
        .bind(req_id)
        .fetch_optional(&self.pool)
        .await?;

        row.ok_or_else(|| AppError::NotFound(format!("Job {req_id} not found")))
    }

    /// All records in insertion order (row id ascending). Restartable: each
    /// call runs a fresh query.
    pub async fn all(&self) -> Result<Vec<JobRecord>, AppError> {
        let rows = sqlx::query_as(&format!(
            "SELECT {RECORD_COLUMNS} FROM jobs ORDER BY id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    /// All records most-recently-ingested first, ties broken by `req_id`
    /// ascending. This is the base ordering for listing and search.
    pub async fn recent(&self) -> Result<Vec<JobRecord>, AppError> {
        let rows = sqlx::query_as(&format!(
            "SELECT {RECORD_COLUMNS} FROM jobs ORDER BY ingested_at DESC, req_id ASC"
        ))
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM jobs")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Full reset. There is deliberately no per-record delete.
    pub async fn wipe(&self) -> Result<(), AppError> {
        sqlx::query("DELETE FROM jobs").execute(&self.pool).await?;
        Ok(())
    }
}
