//! Monitor domain — conference usage records from the communications API.

pub mod client;
pub mod wire;

pub use wire::{ConferenceSummary, ConferencesPage};

/// Query options for the conferences listing.
#[derive(Debug, Clone)]
pub struct ConferencesQuery {
    /// Beginning of the time range, in milliseconds since epoch.
    pub from: i64,
    /// End of the time range, in milliseconds since epoch.
    pub to: i64,
    /// Maximum number of results per page.
    pub max: usize,
    /// Regular expression matched against conference aliases.
    pub alias: Option<String>,
    /// Restrict to ongoing conferences.
    pub active: bool,
    /// External ID of the participant who created the conference.
    pub external_id: Option<String>,
    /// Include live participant counts for ongoing conferences.
    pub live_stats: bool,
}

impl Default for ConferencesQuery {
    fn default() -> Self {
        Self {
            from: 0,
            to: 9_999_999_999_999,
            max: 100,
            alias: None,
            active: false,
            external_id: None,
            live_stats: false,
        }
    }
}

impl ConferencesQuery {
    pub fn time_range(mut self, from: i64, to: i64) -> Self {
        self.from = from;
        self.to = to;
        self
    }

    pub fn max(mut self, max: usize) -> Self {
        self.max = max;
        self
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}
