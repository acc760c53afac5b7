//! Cursor pagination — walks list endpoints to completion.
//!
//! The listing endpoints page with an opaque continuation token, but the
//! endpoint families disagree on names: the monitor family returns the token
//! in `next` and expects it back as the `start` query parameter, the jobs
//! family uses `next_token` for both. The walker owns the response side and
//! termination; the request factory owns the query-parameter side.

use crate::error::SdkError;
use crate::http::client::CrescendoHttp;
use crate::http::request::RequestSpec;
use crate::http::retry::RetryPolicy;

use async_stream::try_stream;
use futures_util::{pin_mut, Stream, StreamExt};
use serde_json::Value;

/// Default page size hint when the caller does not override `max`.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// One page of a listing, as returned by a single wire call.
#[derive(Debug, Clone)]
pub struct Page {
    /// Items in provider order.
    pub items: Vec<Value>,
    /// Continuation token for the next page, when the provider sent one.
    pub next_cursor: Option<String>,
}

/// Walks a cursor-paginated listing endpoint.
#[derive(Debug, Clone)]
pub struct Paginator {
    items_field: String,
    cursor_field: String,
    page_size: usize,
}

impl Paginator {
    /// A walker reading items from `items_field`, with the `next` cursor
    /// field and the default page size hint.
    pub fn new(items_field: impl Into<String>) -> Self {
        Self {
            items_field: items_field.into(),
            cursor_field: "next".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
        }
    }

    /// Override the response field holding the continuation token.
    pub fn cursor_field(mut self, field: impl Into<String>) -> Self {
        self.cursor_field = field.into();
        self
    }

    /// Page size hint: a page shorter than this ends the walk.
    pub fn page_size(mut self, size: usize) -> Self {
        self.page_size = size;
        self
    }

    /// Lazy stream of pages; each page is fetched from the network as the
    /// stream is polled. The walk is finite and not restartable.
    ///
    /// Termination: a response without the items field ends the walk, as
    /// does a short page — even when a continuation token is present, a
    /// short page is authoritative — or a missing/empty token.
    pub fn pages<'a, F>(
        &'a self,
        http: &'a CrescendoHttp,
        mut make_request: F,
    ) -> impl Stream<Item = Result<Page, SdkError>> + 'a
    where
        F: FnMut(Option<&str>) -> RequestSpec + 'a,
    {
        try_stream! {
            let mut cursor: Option<String> = None;

            loop {
                let spec = make_request(cursor.as_deref());
                let mut response = match http.execute(spec, RetryPolicy::Transient).await? {
                    Some(response) => response,
                    None => break,
                };

                let items = match response.get_mut(&self.items_field) {
                    Some(Value::Array(items)) => std::mem::take(items),
                    _ => break,
                };
                let count = items.len();

                let next = response
                    .get(&self.cursor_field)
                    .and_then(Value::as_str)
                    .filter(|token| !token.is_empty())
                    .map(str::to_string);

                yield Page {
                    items,
                    next_cursor: next.clone(),
                };

                if count < self.page_size {
                    break;
                }
                match next {
                    Some(token) => cursor = Some(token),
                    None => break,
                }
            }
        }
    }

    /// Fetch every page and concatenate the items in page order.
    pub async fn collect_all<F>(
        &self,
        http: &CrescendoHttp,
        make_request: F,
    ) -> Result<Vec<Value>, SdkError>
    where
        F: FnMut(Option<&str>) -> RequestSpec,
    {
        let pages = self.pages(http, make_request);
        pin_mut!(pages);

        let mut items = Vec::new();
        while let Some(page) = pages.next().await {
            items.extend(page?.items);
        }
        Ok(items)
    }
}
