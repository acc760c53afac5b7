//! Media jobs domain — processing job queries.

pub mod client;
pub mod wire;

pub use wire::{Job, JobsPage};

/// Filters for the jobs listing. All fields optional; the platform returns
/// jobs from the last 31 days.
#[derive(Debug, Clone, Default)]
pub struct JobsQuery {
    /// Jobs submitted at or after this RFC 3339 instant (inclusive).
    pub submitted_after: Option<String>,
    /// Jobs submitted at or before this RFC 3339 instant (inclusive).
    pub submitted_before: Option<String>,
    /// Jobs with this status (`Pending`, `Running`, `Success`, `Failed`).
    pub status: Option<String>,
}

impl JobsQuery {
    pub fn submitted_after(mut self, instant: impl Into<String>) -> Self {
        self.submitted_after = Some(instant.into());
        self
    }

    pub fn submitted_before(mut self, instant: impl Into<String>) -> Self {
        self.submitted_before = Some(instant.into());
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }
}
