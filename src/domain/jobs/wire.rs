//! Wire types for the media jobs endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A previously submitted processing job.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Job {
    pub job_id: String,
    #[serde(default)]
    pub api_version: Option<String>,
    /// Endpoint path the job was submitted to (e.g. `/media/enhance`).
    #[serde(default)]
    pub path: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    /// Completion percentage, 0–100.
    #[serde(default)]
    pub progress: u32,
    /// Processing duration in seconds.
    #[serde(default)]
    pub duration: f64,
    #[serde(default)]
    pub time_submitted: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_started: Option<DateTime<Utc>>,
    #[serde(default)]
    pub time_completed: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expiry: Option<DateTime<Utc>>,
}

/// One page of the jobs listing.
#[derive(Debug, Clone, Deserialize)]
pub struct JobsPage {
    #[serde(default)]
    pub jobs: Vec<Job>,
    /// Continuation token for the next page.
    #[serde(default)]
    pub next_token: Option<String>,
    #[serde(default)]
    pub count: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_deserializes_sparse_response() {
        let job: Job = serde_json::from_str(
            r#"{"job_id":"91e0a295","status":"Running","progress":40}"#,
        )
        .unwrap();
        assert_eq!(job.job_id, "91e0a295");
        assert_eq!(job.status.as_deref(), Some("Running"));
        assert_eq!(job.progress, 40);
        assert!(job.time_completed.is_none());
    }

    #[test]
    fn test_jobs_page_with_cursor() {
        let page: JobsPage = serde_json::from_str(
            r#"{"jobs":[{"job_id":"a","time_submitted":"2026-07-01T10:00:00Z"}],"next_token":"tok-2","count":41}"#,
        )
        .unwrap();
        assert_eq!(page.jobs.len(), 1);
        assert_eq!(page.next_token.as_deref(), Some("tok-2"));
        assert!(page.jobs[0].time_submitted.is_some());
    }
}
