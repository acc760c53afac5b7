//! Jobs sub-client — media processing job queries.

use crate::client::CrescendoClient;
use crate::domain::jobs::wire::{Job, JobsPage};
use crate::domain::jobs::JobsQuery;
use crate::error::SdkError;
use crate::http::paging::Paginator;
use crate::http::request::RequestSpec;
use crate::http::retry::RetryPolicy;

pub struct Jobs<'a> {
    pub(crate) client: &'a CrescendoClient,
}

impl<'a> Jobs<'a> {
    fn page_spec(
        &self,
        access_token: &str,
        query: &JobsQuery,
        next_token: Option<&str>,
    ) -> RequestSpec {
        RequestSpec::get(format!("{}/media/jobs", self.client.media_url))
            .bearer(access_token)
            .query_opt("submitted_after", query.submitted_after.as_deref())
            .query_opt("submitted_before", query.submitted_before.as_deref())
            .query_opt("status", query.status.as_deref())
            .query_opt("next_token", next_token)
    }

    /// Query one page of jobs.
    ///
    /// Pass the `next_token` from a previous page to continue a listing.
    pub async fn list(
        &self,
        access_token: &str,
        query: &JobsQuery,
        next_token: Option<&str>,
    ) -> Result<JobsPage, SdkError> {
        self.client
            .http
            .execute_typed(self.page_spec(access_token, query, next_token), RetryPolicy::Transient)
            .await
    }

    /// Walk every page and return the complete job list.
    pub async fn list_all(
        &self,
        access_token: &str,
        query: &JobsQuery,
    ) -> Result<Vec<Job>, SdkError> {
        let items = Paginator::new("jobs")
            .cursor_field("next_token")
            .collect_all(&self.client.http, |cursor| {
                self.page_spec(access_token, query, cursor)
            })
            .await?;

        items
            .into_iter()
            .map(|job| serde_json::from_value(job).map_err(SdkError::from))
            .collect()
    }
}
