//! Ingestion Pipeline: turns raw or mock job data into stored records.
//!
//! External input is loosely structured (field names and presence are not
//! guaranteed), so each raw record passes through a normalization step that
//! produces a tagged variant instead of failing the batch: malformed entries
//! are skipped and counted, valid ones are upserted. Re-running a batch with
//! the same req_ids is a no-op duplicate-wise; the store upserts.

use chrono::Utc;
use serde::Serialize;
use serde_json::Value;
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::JobRecord;
use crate::store::JobStore;

/// Outcome counts for one ingestion batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IngestReport {
    pub ingested: usize,
    pub skipped: usize,
}

/// Result of normalizing one raw record.
#[derive(Debug)]
pub enum Normalized {
    Valid(JobRecord),
    Skipped(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Keyword extraction
// ────────────────────────────────────────────────────────────────────────────

/// Technology vocabulary recognized in free text when a raw record carries
/// no keywords of its own. Lowercase; matched on word boundaries.
const TECH_VOCABULARY: &[&str] = &[
    "java",
    "python",
    "javascript",
    "typescript",
    "c#",
    "c++",
    "go",
    "rust",
    "scala",
    "kotlin",
    "swift",
    "react",
    "angular",
    "vue",
    "node.js",
    "spring",
    "django",
    "flask",
    ".net",
    "fastapi",
    "aws",
    "azure",
    "gcp",
    "kubernetes",
    "docker",
    "terraform",
    "jenkins",
    "ci/cd",
    "sql",
    "postgresql",
    "mysql",
    "mongodb",
    "redis",
    "elasticsearch",
    "snowflake",
    "databricks",
    "spark",
    "hadoop",
    "kafka",
    "airflow",
    "machine learning",
    "tensorflow",
    "pytorch",
    "trading",
    "fix protocol",
    "fintech",
    "api",
    "rest",
    "graphql",
    "microservices",
    "agile",
    "git",
];

/// True when `needle` occurs in `haystack` bounded by non-alphanumeric
/// characters on both sides. Manual boundary check because vocabulary terms
/// like `c++`, `.net` and `ci/cd` defeat word-character regex boundaries.
fn contains_term(haystack: &str, needle: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = haystack[from..].find(needle) {
        let start = from + pos;
        let end = start + needle.len();
        let bounded_left = haystack[..start]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let bounded_right = haystack[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if bounded_left && bounded_right {
            return true;
        }
        from = start + 1;
    }
    false
}

/// Extracts known technology keywords from free text: deduplicated, sorted,
/// comma-joined surface form.
pub fn extract_tech_keywords(text: &str) -> String {
    let lower = text.to_lowercase();
    let found: Vec<&str> = TECH_VOCABULARY
        .iter()
        .filter(|term| contains_term(&lower, term))
        .copied()
        .collect();
    // TECH_VOCABULARY is unsorted for readability; the output contract is sorted.
    let mut found = found;
    found.sort_unstable();
    found.join(", ")
}

// ────────────────────────────────────────────────────────────────────────────
// Normalization of loosely-structured external records
// ────────────────────────────────────────────────────────────────────────────

fn string_field(raw: &Value, names: &[&str]) -> Option<String> {
    names
        .iter()
        .find_map(|n| raw.get(*n).and_then(Value::as_str))
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Maps one raw record to a `JobRecord` or a skip reason. Never fails the
/// batch: unknown shapes become `Skipped`.
pub fn normalize(raw: &Value) -> Normalized {
    if !raw.is_object() {
        return Normalized::Skipped("entry is not an object".to_string());
    }

    let Some(req_id) = string_field(raw, &["req_id", "requisition_id", "id"]) else {
        return Normalized::Skipped("missing req_id".to_string());
    };
    let Some(title) = string_field(raw, &["title", "job_title"]) else {
        return Normalized::Skipped(format!("missing title (req_id {req_id})"));
    };

    let location = string_field(raw, &["location"]).unwrap_or_default();
    let pay_range = string_field(raw, &["pay_range", "salary"]).unwrap_or_default();
    let description = string_field(raw, &["description"]).unwrap_or_default();
    let tech_keywords = string_field(raw, &["tech_keywords", "keywords"])
        .unwrap_or_else(|| extract_tech_keywords(&format!("{title} {description}")));

    Normalized::Valid(JobRecord {
        req_id,
        title,
        location,
        pay_range,
        tech_keywords,
        description,
        ingested_at: Utc::now(),
    })
}

/// Normalizes and upserts a batch of loosely-structured records. Malformed
/// entries are logged, counted and skipped; store failures abort the batch.
pub async fn ingest_external(store: &JobStore, raw_records: &[Value]) -> Result<IngestReport, AppError> {
    let mut ingested = 0;
    let mut skipped = 0;

    for raw in raw_records {
        match normalize(raw) {
            Normalized::Valid(job) => {
                store.upsert(&job).await?;
                ingested += 1;
            }
            Normalized::Skipped(reason) => {
                warn!("Skipping raw job record: {reason}");
                skipped += 1;
            }
        }
    }

    info!("Ingested {ingested} job records, skipped {skipped}");
    Ok(IngestReport { ingested, skipped })
}

// ────────────────────────────────────────────────────────────────────────────
// Mock batch generation
// ────────────────────────────────────────────────────────────────────────────

const MOCK_TITLES: &[&str] = &[
    "Software Engineer - Full Stack",
    "Software Engineer Lead - Full Stack",
    "Java Software Engineer",
    "Site Reliability Engineer",
    "Python Backend Developer",
    "Kafka Platform Engineer",
    "React Frontend Engineer",
    "Cloud Platform Engineer",
];

const MOCK_LOCATIONS: &[&str] = &[
    "Southlake, TX",
    "Austin, TX",
    "Ann Arbor, MI",
    "Portland, OR",
];

const MOCK_KEYWORDS: &[&str] = &[
    "java, react, spring, aws, rest, api",
    "java, python, react, microservices, kubernetes",
    "java, sql, kafka, trading, rest, api",
    "kubernetes, docker, jenkins, terraform, ci/cd",
    "python, fastapi, django, sql, docker, api",
    "kafka, java, scala, kubernetes",
    "react, typescript, javascript",
    "aws, azure, terraform, kubernetes",
];

const MOCK_PAY_RANGES: &[&str] = &[
    "USD $145,000.00 - $158,000.00 / Year",
    "USD $150,000.00 - $200,000.00 / Year",
    "USD $110,100.00 - $180,000.00 / Year",
    "USD $125,000.00 - $165,000.00 / Year",
];

const MOCK_DESCRIPTIONS: &[&str] = &[
    "Build full stack features for a wealth management platform with modern development practices.",
    "Lead a team of engineers building trading and advisory solutions; hands-on technical leadership.",
    "Contribute to a new generation order management system on a highly scalable trading platform.",
    "Develop, manage and run delivery pipelines to reduce friction for software releases.",
    "Develop backend services for a data analytics platform; scalable APIs and processing pipelines.",
];

/// Deterministically generates and upserts `n` synthetic job records,
/// cycling the fixed tables above. Req ids are `2025-0001`, `2025-0002`, ...
/// so a re-run upserts over the previous batch instead of growing the store.
pub async fn ingest_mock(store: &JobStore, n: usize) -> Result<IngestReport, AppError> {
    for i in 0..n {
        let job = mock_record(i);
        store.upsert(&job).await?;
    }
    info!("Seeded {n} mock job records");
    Ok(IngestReport {
        ingested: n,
        skipped: 0,
    })
}

/// The `i`-th mock record (zero-based). Split out so tests can inspect the
/// generation without a store.
pub fn mock_record(i: usize) -> JobRecord {
    JobRecord {
        req_id: format!("2025-{:04}", i + 1),
        title: MOCK_TITLES[i % MOCK_TITLES.len()].to_string(),
        location: MOCK_LOCATIONS[i % MOCK_LOCATIONS.len()].to_string(),
        pay_range: MOCK_PAY_RANGES[i % MOCK_PAY_RANGES.len()].to_string(),
        tech_keywords: MOCK_KEYWORDS[i % MOCK_KEYWORDS.len()].to_string(),
        description: MOCK_DESCRIPTIONS[i % MOCK_DESCRIPTIONS.len()].to_string(),
        ingested_at: Utc::now(),
    }
}
