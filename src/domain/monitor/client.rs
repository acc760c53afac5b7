//! Monitor sub-client — conference usage queries.

use crate::client::CrescendoClient;
use crate::domain::monitor::wire::{ConferenceSummary, ConferencesPage};
use crate::domain::monitor::ConferencesQuery;
use crate::error::SdkError;
use crate::http::paging::Paginator;
use crate::http::request::RequestSpec;
use crate::http::retry::RetryPolicy;

pub struct Monitor<'a> {
    pub(crate) client: &'a CrescendoClient,
}

impl<'a> Monitor<'a> {
    fn page_spec(
        &self,
        access_token: &str,
        query: &ConferencesQuery,
        start: Option<&str>,
    ) -> RequestSpec {
        RequestSpec::get(format!("{}/monitor/conferences", self.client.comms_url))
            .bearer(access_token)
            .query("from", query.from.to_string())
            .query("to", query.to.to_string())
            .query("max", query.max.to_string())
            .query("active", query.active.to_string())
            .query("livestats", query.live_stats.to_string())
            .query_opt("alias", query.alias.as_deref())
            .query_opt("exid", query.external_id.as_deref())
            .query_opt("start", start)
    }

    /// Get the summary of a single conference.
    ///
    /// Only terminated conferences carry a complete summary; ongoing ones
    /// answer with the identity fields and `live: true`.
    pub async fn conference(
        &self,
        access_token: &str,
        conference_id: &str,
        live_stats: bool,
    ) -> Result<ConferenceSummary, SdkError> {
        let spec = RequestSpec::get(format!(
            "{}/monitor/conferences/{}",
            self.client.comms_url,
            urlencoding::encode(conference_id)
        ))
        .bearer(access_token)
        .query("livestats", live_stats.to_string());

        self.client
            .http
            .execute_typed(spec, RetryPolicy::Transient)
            .await
    }

    /// Get one page of conferences started in the query's time range,
    /// including ongoing ones.
    ///
    /// Pass the `next` token from a previous page as `start` to continue.
    pub async fn conferences(
        &self,
        access_token: &str,
        query: &ConferencesQuery,
        start: Option<&str>,
    ) -> Result<ConferencesPage, SdkError> {
        self.client
            .http
            .execute_typed(self.page_spec(access_token, query, start), RetryPolicy::Transient)
            .await
    }

    /// Walk every page and return all conference summaries in the range.
    pub async fn all_conferences(
        &self,
        access_token: &str,
        query: &ConferencesQuery,
    ) -> Result<Vec<ConferenceSummary>, SdkError> {
        let items = Paginator::new("conferences")
            .page_size(query.max)
            .collect_all(&self.client.http, |cursor| {
                self.page_spec(access_token, query, cursor)
            })
            .await?;

        items
            .into_iter()
            .map(|summary| serde_json::from_value(summary).map_err(SdkError::from))
            .collect()
    }
}
