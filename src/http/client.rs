//! Low-level HTTP executor — `CrescendoHttp`.
//!
//! Renders a [`RequestSpec`] onto the wire: gates it through the rate
//! limiter, enforces per-attempt timeouts, consults the retry policy on
//! transient failures, classifies terminal `>= 400` responses and decodes
//! successful bodies as JSON. Endpoint wrappers sit on top; this layer never
//! inspects business semantics of the payloads it carries.

use crate::auth::Credential;
use crate::error::SdkError;
use crate::http::classify::classify;
use crate::http::rate_limit::RateLimiter;
use crate::http::request::{RequestBody, RequestSpec};
use crate::http::retry::{RetryConfig, RetryPolicy};

use reqwest::header::{HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Total per-attempt deadline for standard API calls.
pub const TOTAL_REQUEST_TIMEOUT: Duration = Duration::from_secs(60);

/// Total per-attempt deadline for file downloads.
pub const TOTAL_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30 * 60);

/// Deadline for establishing a connection, independent of the total.
pub const CONNECT_REQUEST_TIMEOUT: Duration = Duration::from_secs(25);

/// HTTP executor shared by every sub-client.
#[derive(Debug, Clone)]
pub struct CrescendoHttp {
    pub(crate) client: Client,
    pub(crate) limiter: Arc<RateLimiter>,
    pub(crate) request_timeout: Duration,
    pub(crate) download_timeout: Duration,
}

impl CrescendoHttp {
    /// An executor with the default timeouts, gated by `limiter`.
    pub fn new(limiter: Arc<RateLimiter>) -> Result<Self, SdkError> {
        Self::with_timeouts(
            limiter,
            TOTAL_REQUEST_TIMEOUT,
            CONNECT_REQUEST_TIMEOUT,
            TOTAL_DOWNLOAD_TIMEOUT,
        )
    }

    pub fn with_timeouts(
        limiter: Arc<RateLimiter>,
        request_timeout: Duration,
        connect_timeout: Duration,
        download_timeout: Duration,
    ) -> Result<Self, SdkError> {
        let client = Client::builder()
            .connect_timeout(connect_timeout)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            client,
            limiter,
            request_timeout,
            download_timeout,
        })
    }

    /// Execute a request and decode the response body.
    ///
    /// Returns `Ok(None)` when the response has no JSON content: an empty
    /// body, a non-JSON content type, or a JSON-typed body that does not
    /// parse. A terminal `>= 400` status is classified into
    /// [`ApiError`](crate::error::ApiError); transport failures other than
    /// timeouts propagate immediately without retry.
    pub async fn execute(
        &self,
        spec: RequestSpec,
        retry: RetryPolicy,
    ) -> Result<Option<Value>, SdkError> {
        let response = self
            .send_with_retry(&spec, retry.config(), self.request_timeout, true)
            .await?;
        decode_json_body(response).await
    }

    /// Execute a request and deserialize the JSON body into `T`.
    pub async fn execute_typed<T: DeserializeOwned>(
        &self,
        spec: RequestSpec,
        retry: RetryPolicy,
    ) -> Result<T, SdkError> {
        let url = spec.url.clone();
        match self.execute(spec, retry).await? {
            Some(value) => Ok(serde_json::from_value(value)?),
            None => Err(SdkError::Other(format!("expected a JSON body from {url}"))),
        }
    }

    /// Byte-stream mode: execute a request under the long transfer deadline
    /// and hand back the undecoded response.
    ///
    /// Status classification still applies; the body is left untouched for
    /// the caller to stream. Transfers bypass the rate limiter — the storage
    /// endpoints are not the rate-limited API.
    pub async fn execute_raw(
        &self,
        spec: RequestSpec,
        retry: RetryPolicy,
    ) -> Result<reqwest::Response, SdkError> {
        self.send_with_retry(&spec, retry.config(), self.download_timeout, false)
            .await
    }

    async fn send_with_retry(
        &self,
        spec: &RequestSpec,
        config: Option<RetryConfig>,
        timeout: Duration,
        rate_limited: bool,
    ) -> Result<reqwest::Response, SdkError> {
        let max_attempts = config.as_ref().map_or(1, |c| c.max_attempts.max(1));
        let mut attempt = 0;

        loop {
            match self.send_once(spec, timeout, rate_limited).await {
                Ok(response) => {
                    let status = response.status().as_u16();
                    if status < 400 {
                        return Ok(response);
                    }

                    if let Some(config) = &config {
                        if config.is_retryable_status(status) && attempt + 1 < max_attempts {
                            let delay = config.delay_for_attempt(attempt);
                            tracing::debug!(
                                attempt = attempt + 1,
                                max = max_attempts,
                                delay_ms = delay.as_millis() as u64,
                                status,
                                "retrying request to {}",
                                spec.url
                            );
                            futures_timer::Delay::new(delay).await;
                            attempt += 1;
                            continue;
                        }
                    }

                    let url = response.url().to_string();
                    let body = response.bytes().await.ok();
                    return Err(classify(status, &url, body.as_deref()).into());
                }
                Err(SdkError::Transport(error)) if error.is_timeout() => {
                    if let Some(config) = &config {
                        if attempt + 1 < max_attempts {
                            let delay = config.delay_for_attempt(attempt);
                            tracing::debug!(
                                attempt = attempt + 1,
                                max = max_attempts,
                                delay_ms = delay.as_millis() as u64,
                                "retrying request to {} after timeout",
                                spec.url
                            );
                            futures_timer::Delay::new(delay).await;
                            attempt += 1;
                            continue;
                        }
                    }
                    tracing::error!(
                        "unable to get data from {} because of a timeout ({:?})",
                        spec.url,
                        timeout
                    );
                    return Err(SdkError::Transport(error));
                }
                // DNS failures, refused connections and TLS errors are
                // terminal regardless of policy.
                Err(error) => return Err(error),
            }
        }
    }

    async fn send_once(
        &self,
        spec: &RequestSpec,
        timeout: Duration,
        rate_limited: bool,
    ) -> Result<reqwest::Response, SdkError> {
        // Retries re-enter here, so every attempt pays for its own token.
        if rate_limited {
            self.limiter.acquire().await;
        }

        if spec.query.is_empty() {
            tracing::debug!("{} {}", spec.method, spec.url);
        } else {
            tracing::debug!("{} {} {:?}", spec.method, spec.url, spec.query);
        }
        let started = Instant::now();

        let mut request = self
            .client
            .request(spec.method.clone(), &spec.url)
            .timeout(timeout);

        if !spec.query.is_empty() {
            request = request.query(&spec.query);
        }

        let mut has_accept = false;
        for (name, value) in &spec.headers {
            let header_name = HeaderName::try_from(name.as_str()).map_err(|e| {
                SdkError::InvalidRequest(format!("invalid header name '{name}': {e}"))
            })?;
            let header_value = HeaderValue::from_str(value).map_err(|e| {
                SdkError::InvalidRequest(format!("invalid value for header '{name}': {e}"))
            })?;
            has_accept = has_accept || header_name == ACCEPT;
            request = request.header(header_name, header_value);
        }
        if !has_accept {
            request = request.header(ACCEPT, "application/json");
        }

        match &spec.auth {
            Some(Credential::Bearer(token)) => request = request.bearer_auth(token),
            Some(Credential::KeySecret {
                app_key,
                app_secret,
            }) => request = request.basic_auth(app_key, Some(app_secret)),
            None => {}
        }

        request = match &spec.body {
            RequestBody::Empty => request,
            RequestBody::Json(value) => request.json(value),
            RequestBody::Raw(body) => request.body(body.clone()),
            RequestBody::Form(fields) => request.form(fields),
        };

        let response = request.send().await?;
        tracing::debug!("elapsed {:.3} seconds", started.elapsed().as_secs_f64());
        Ok(response)
    }
}

/// Decode a `< 400` response body per the "JSON or nothing" contract.
async fn decode_json_body(response: reqwest::Response) -> Result<Option<Value>, SdkError> {
    let json_typed = response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.contains("json"));
    if !json_typed {
        return Ok(None);
    }

    let url = response.url().clone();
    let bytes = response.bytes().await?;
    if bytes.is_empty() {
        return Ok(None);
    }

    match serde_json::from_slice(&bytes) {
        Ok(value) => Ok(Some(value)),
        Err(error) => {
            tracing::warn!("response from {} declared JSON but failed to parse: {}", url, error);
            Ok(None)
        }
    }
}
