use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A stored job posting, keyed by requisition id.
///
/// Immutable once written; re-ingestion replaces the whole row via upsert.
/// The table carries an internal autoincrement row id for insertion order,
/// but it never leaves the store layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct JobRecord {
    pub req_id: String,
    pub title: String,
    pub location: String,
    /// Free-form, e.g. "USD $110,100.00 - $180,000.00 / Year". Empty when unknown.
    pub pay_range: String,
    /// Comma-separated surface form, e.g. "java, kafka, sql".
    pub tech_keywords: String,
    pub description: String,
    pub ingested_at: DateTime<Utc>,
}

impl JobRecord {
    /// Individual keyword tokens: split on commas, trimmed, empties dropped.
    pub fn keyword_tokens(&self) -> impl Iterator<Item = &str> {
        self.tech_keywords
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
    }
}
