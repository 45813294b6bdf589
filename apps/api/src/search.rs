//! Search Index: keyword filtering over the stored records.
//!
//! Intentionally simple substring matching, not statistical relevance. The
//! store is small, so the index is derived on demand: callers pass in the
//! records in recency order and get back a filtered, two-tier ordering.

use crate::models::JobRecord;

/// The searchable text derived from one record: title, location, keywords
/// and description concatenated, lowercased.
fn search_blob(job: &JobRecord) -> String {
    format!(
        "{} {} {} {}",
        job.title, job.location, job.tech_keywords, job.description
    )
    .to_lowercase()
}

/// A term matches when it appears as a substring of the blob, or equals a
/// single comma-separated tech keyword token exactly. Both case-insensitive;
/// `term` is already lowercased.
fn term_matches(job: &JobRecord, blob: &str, term: &str) -> bool {
    blob.contains(term)
        || job
            .keyword_tokens()
            .any(|token| token.to_lowercase() == term)
}

/// Filters `records` by `query` and orders the result.
///
/// An empty or whitespace-only query returns all records in the incoming
/// order. A multi-term query (split on whitespace) is an implicit AND:
/// every term must independently match. Records where any term hits the
/// title rank before records matching only elsewhere; within a tier the
/// incoming recency order is preserved.
pub fn search(records: Vec<JobRecord>, query: &str) -> Vec<JobRecord> {
    let query = query.trim();
    if query.is_empty() {
        return records;
    }

    let terms: Vec<String> = query
        .split_whitespace()
        .map(|t| t.to_lowercase())
        .collect();

    let mut title_matches = Vec::new();
    let mut other_matches = Vec::new();

    for job in records {
        let blob = search_blob(&job);
        if !terms.iter().all(|t| term_matches(&job, &blob, t)) {
            continue;
        }
        let title = job.title.to_lowercase();
        if terms.iter().any(|t| title.contains(t.as_str())) {
            title_matches.push(job);
        } else {
            other_matches.push(job);
        }
    }

    title_matches.extend(other_matches);
    title_matches
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn make_job(req_id: &str, title: &str, location: &str, keywords: &str) -> JobRecord {
        JobRecord {
            req_id: req_id.to_string(),
            title: title.to_string(),
            location: location.to_string(),
            pay_range: String::new(),
            tech_keywords: keywords.to_string(),
            description: "Design and build services.".to_string(),
            ingested_at: Utc::now(),
        }
    }

    fn sample_records() -> Vec<JobRecord> {
        vec![
            make_job("2025-0001", "Java Software Engineer", "Austin, TX", "java, sql, kafka"),
            make_job("2025-0002", "Site Reliability Engineer", "Portland, OR", "kubernetes, docker"),
            make_job("2025-0003", "Python Backend Developer", "Portland, OR", "python, java, sql"),
        ]
    }

    #[test]
    fn empty_query_returns_all_in_incoming_order() {
        let records = sample_records();
        let results = search(records.clone(), "");
        assert_eq!(results, records);

        let results = search(records.clone(), "   ");
        assert_eq!(results, records);
    }

    #[test]
    fn query_is_case_insensitive() {
        let upper = search(sample_records(), "JAVA");
        let lower = search(sample_records(), "java");
        let upper_ids: Vec<&str> = upper.iter().map(|j| j.req_id.as_str()).collect();
        let lower_ids: Vec<&str> = lower.iter().map(|j| j.req_id.as_str()).collect();
        assert_eq!(upper_ids, lower_ids);
        assert_eq!(lower_ids.len(), 2);
    }

    #[test]
    fn multi_term_query_is_an_and() {
        let results = search(sample_records(), "java portland");
        let ids: Vec<&str> = results.iter().map(|j| j.req_id.as_str()).collect();
        // Only 2025-0003 has both java (keyword) and Portland (location).
        assert_eq!(ids, vec!["2025-0003"]);
    }

    #[test]
    fn title_matches_rank_before_other_matches() {
        // 2025-0003 is more recent (listed first) but only matches "java"
        // via keywords; 2025-0001 matches in the title and must come first.
        let records = vec![
            make_job("2025-0003", "Python Backend Developer", "Portland, OR", "python, java"),
            make_job("2025-0001", "Java Software Engineer", "Austin, TX", "sql"),
        ];
        let results = search(records, "java");
        let ids: Vec<&str> = results.iter().map(|j| j.req_id.as_str()).collect();
        assert_eq!(ids, vec!["2025-0001", "2025-0003"]);
    }

    #[test]
    fn recency_order_is_preserved_within_a_tier() {
        let records = vec![
            make_job("2025-0005", "Java Platform Engineer", "Austin, TX", "java"),
            make_job("2025-0002", "Java Software Engineer", "Austin, TX", "java"),
        ];
        let results = search(records, "java");
        let ids: Vec<&str> = results.iter().map(|j| j.req_id.as_str()).collect();
        assert_eq!(ids, vec!["2025-0005", "2025-0002"]);
    }

    #[test]
    fn keyword_token_matches_exactly() {
        let records = vec![make_job(
            "2025-0001",
            "Software Engineer",
            "Austin, TX",
            "c++, java",
        )];
        let results = search(records, "c++");
        assert_eq!(results.len(), 1);
    }

    #[test]
    fn non_matching_query_returns_nothing() {
        let results = search(sample_records(), "haskell");
        assert!(results.is_empty());
    }

    #[test]
    fn query_matches_description_substring() {
        let results = search(sample_records(), "build services");
        // Every sample description contains both terms.
        assert_eq!(results.len(), 3);
    }
}
