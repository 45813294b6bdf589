#![allow(dead_code)]

//! Query Service: the façade external callers talk to.
//!
//! Owns the record store (handed in at construction) and delegates to the
//! search and prompt modules. Every call is independent; the only shared
//! state is the store itself.

use std::collections::HashSet;

use serde::Serialize;

use crate::errors::AppError;
use crate::models::{JobRecord, Profile};
use crate::prompt;
use crate::search;
use crate::store::JobStore;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Stats {
    pub count: i64,
    pub distinct_locations: usize,
    pub distinct_tech_keywords: usize,
}

#[derive(Clone)]
pub struct QueryService {
    store: JobStore,
}

impl QueryService {
    pub fn new(store: JobStore) -> Self {
        Self { store }
    }

    /// The underlying store, for bootstrap ingestion.
    pub fn store(&self) -> &JobStore {
        &self.store
    }

    /// Lists records matching `query`, most relevant first. `None` or an
    /// empty query lists everything, most-recently-ingested first.
    pub async fn list_jobs(&self, query: Option<&str>) -> Result<Vec<JobRecord>, AppError> {
        let records = self.store.recent().await?;
        Ok(search::search(records, query.unwrap_or("")))
    }

    pub async fn get_job(&self, req_id: &str) -> Result<JobRecord, AppError> {
        self.store.get(req_id).await
    }

    /// Store-wide counts. A full scan is fine here; the store is small by
    /// design.
    pub async fn stats(&self) -> Result<Stats, AppError> {
        let records = self.store.all().await?;

        let locations: HashSet<&str> = records
            .iter()
            .map(|j| j.location.trim())
            .filter(|l| !l.is_empty())
            .collect();
        let keywords: HashSet<String> = records
            .iter()
            .flat_map(|j| j.keyword_tokens().map(str::to_lowercase))
            .collect();

        Ok(Stats {
            count: records.len() as i64,
            distinct_locations: locations.len(),
            distinct_tech_keywords: keywords.len(),
        })
    }

    /// Resolves the job when an id is given (typed NotFound on an unknown
    /// id, no partial output) and assembles the prompt payload.
    pub async fn generate_prompt(
        &self,
        job_id: Option<&str>,
        profile: &Profile,
    ) -> Result<String, AppError> {
        let job = match job_id {
            Some(id) => Some(self.store.get(id).await?),
            None => None,
        };
        Ok(prompt::assemble(profile, job.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingest;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn seeded_service(n: usize) -> QueryService {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();
        crate::db::init_schema(&pool).await.unwrap();
        let store = JobStore::new(pool);
        ingest::ingest_mock(&store, n).await.unwrap();
        QueryService::new(store)
    }

    #[tokio::test]
    async fn mock_seed_scenario_end_to_end() {
        let service = seeded_service(5).await;

        // Five records, 2025-0001 through 2025-0005, no duplicates on re-seed.
        assert_eq!(service.stats().await.unwrap().count, 5);
        ingest::ingest_mock(service.store(), 5).await.unwrap();
        assert_eq!(service.stats().await.unwrap().count, 5);

        // Empty query lists everything.
        let all = service.list_jobs(None).await.unwrap();
        assert_eq!(all.len(), 5);

        // "Lead" only hits records whose title contains it.
        let leads = service.list_jobs(Some("Lead")).await.unwrap();
        assert!(!leads.is_empty());
        assert!(leads.iter().all(|j| j.title.contains("Lead")));

        // Get-by-id returns the exact record from the batch.
        let third = service.get_job("2025-0003").await.unwrap();
        assert_eq!(third.title, ingest::mock_record(2).title);
    }

    #[tokio::test]
    async fn search_result_count_matches_store_count_for_empty_query() {
        let service = seeded_service(4).await;
        let listed = service.list_jobs(Some("")).await.unwrap();
        assert_eq!(listed.len() as i64, service.stats().await.unwrap().count);
    }

    #[tokio::test]
    async fn stats_count_distinct_dimensions() {
        let service = seeded_service(2).await;
        let stats = service.stats().await.unwrap();
        assert_eq!(stats.count, 2);
        // First two mock records use distinct locations and keyword sets.
        assert_eq!(stats.distinct_locations, 2);
        assert!(stats.distinct_tech_keywords > 0);
    }

    #[tokio::test]
    async fn generate_prompt_with_unknown_id_is_not_found() {
        let service = seeded_service(2).await;
        let profile = Profile {
            name: "Scott Weeden".to_string(),
            ..Profile::default()
        };
        let result = service.generate_prompt(Some("2025-9999"), &profile).await;
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn generate_prompt_embeds_job_details() {
        let service = seeded_service(3).await;
        let profile = Profile {
            name: "Scott Weeden".to_string(),
            ..Profile::default()
        };
        let prompt = service
            .generate_prompt(Some("2025-0002"), &profile)
            .await
            .unwrap();
        assert!(prompt.contains("- Requisition ID: 2025-0002"));
        assert!(prompt.contains("- Name: Scott Weeden"));
    }

    #[tokio::test]
    async fn generate_prompt_without_job_omits_target_block() {
        let service = seeded_service(1).await;
        let profile = Profile {
            name: "Scott Weeden".to_string(),
            ..Profile::default()
        };
        let prompt = service.generate_prompt(None, &profile).await.unwrap();
        assert!(!prompt.contains("TARGET JOB DETAILS"));
    }
}
