//! Wire types for the monitor conferences endpoints.
//!
//! The communications backend answers in camelCase; only terminated
//! conferences carry a complete summary, so everything past the identity
//! fields defaults.

use serde::{Deserialize, Serialize};

/// Usage summary for one conference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ConferenceSummary {
    pub conf_id: String,
    #[serde(default)]
    pub alias: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    /// Start instant, in milliseconds since epoch.
    #[serde(default)]
    pub start: i64,
    #[serde(default)]
    pub live: bool,
    /// End instant, in milliseconds since epoch; 0 while live.
    #[serde(default)]
    pub end: i64,
    #[serde(default)]
    pub duration: i64,
    #[serde(default, rename = "type")]
    pub conference_type: Option<String>,
    #[serde(default)]
    pub presence_duration: i64,
    #[serde(default)]
    pub recording_duration: i64,
    #[serde(default)]
    pub nb_users: u64,
    #[serde(default)]
    pub nb_listeners: u64,
    #[serde(default)]
    pub nb_pstn: u64,
}

/// One page of the conferences listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ConferencesPage {
    #[serde(default)]
    pub conferences: Vec<ConferenceSummary>,
    /// Cursor of the first element of this page.
    #[serde(default)]
    pub first: Option<String>,
    /// Continuation token, sent back as the `start` query parameter.
    #[serde(default)]
    pub next: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_live_conference_sparse_summary() {
        let summary: ConferenceSummary = serde_json::from_str(
            r#"{"confId":"8f2e","alias":"standup","region":"eu","start":1750000000000,"live":true}"#,
        )
        .unwrap();
        assert_eq!(summary.conf_id, "8f2e");
        assert!(summary.live);
        assert_eq!(summary.end, 0);
        assert_eq!(summary.nb_users, 0);
    }

    #[test]
    fn test_terminated_conference_full_summary() {
        let summary: ConferenceSummary = serde_json::from_str(
            r#"{"confId":"8f2e","alias":"standup","start":1,"live":false,"end":2,
                "duration":60,"type":"Conference","presenceDuration":55,
                "recordingDuration":0,"nbUsers":4,"nbListeners":1,"nbPstn":0}"#,
        )
        .unwrap();
        assert_eq!(summary.duration, 60);
        assert_eq!(summary.nb_users, 4);
        assert_eq!(summary.conference_type.as_deref(), Some("Conference"));
    }

    #[test]
    fn test_page_cursor_fields() {
        let page: ConferencesPage = serde_json::from_str(
            r#"{"conferences":[],"first":"c-0","next":"c-100"}"#,
        )
        .unwrap();
        assert!(page.conferences.is_empty());
        assert_eq!(page.next.as_deref(), Some("c-100"));
    }
}
