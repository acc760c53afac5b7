//! High-level client — `CrescendoClient` with nested sub-client accessors.
//!
//! Each endpoint family has its own sub-client in `domain/<name>/client.rs`.
//! This module keeps the builder, shared executor and accessor methods.

use crate::auth::client::Auth;
use crate::domain::jobs::client::Jobs;
use crate::domain::media_io::client::MediaIo;
use crate::domain::monitor::client::Monitor;
use crate::error::SdkError;
use crate::http::client::{
    CrescendoHttp, CONNECT_REQUEST_TIMEOUT, TOTAL_DOWNLOAD_TIMEOUT, TOTAL_REQUEST_TIMEOUT,
};
use crate::http::rate_limit::{RateLimiter, MAX_REQUESTS_PER_SECOND};
use crate::network;

use std::sync::Arc;
use std::time::Duration;

// Re-export sub-client types for convenience.
pub use crate::auth::client::Auth as AuthClient;
pub use crate::domain::jobs::client::Jobs as JobsClient;
pub use crate::domain::media_io::client::MediaIo as MediaIoClient;
pub use crate::domain::monitor::client::Monitor as MonitorClient;

/// The primary entry point for the Crescendo SDK.
///
/// Provides nested sub-client accessors per endpoint family:
/// `client.auth()`, `client.jobs()`, `client.monitor()`, `client.media_io()`.
/// Callers with endpoints outside these slices build a
/// [`RequestSpec`](crate::http::request::RequestSpec) and go through
/// [`http()`](Self::http) directly.
#[derive(Debug, Clone)]
pub struct CrescendoClient {
    pub(crate) http: CrescendoHttp,
    pub(crate) api_url: String,
    pub(crate) comms_url: String,
    pub(crate) media_url: String,
}

impl CrescendoClient {
    /// A client with default URLs, timeouts and rate capacity.
    pub fn new() -> Result<Self, SdkError> {
        Self::builder().build()
    }

    pub fn builder() -> CrescendoClientBuilder {
        CrescendoClientBuilder::default()
    }

    // ── Sub-client accessors ─────────────────────────────────────────────

    pub fn auth(&self) -> Auth<'_> {
        Auth { client: self }
    }

    pub fn jobs(&self) -> Jobs<'_> {
        Jobs { client: self }
    }

    pub fn monitor(&self) -> Monitor<'_> {
        Monitor { client: self }
    }

    pub fn media_io(&self) -> MediaIo<'_> {
        MediaIo { client: self }
    }

    /// The underlying executor, for endpoints without a shipped sub-client.
    pub fn http(&self) -> &CrescendoHttp {
        &self.http
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    pub fn comms_url(&self) -> &str {
        &self.comms_url
    }

    pub fn media_url(&self) -> &str {
        &self.media_url
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct CrescendoClientBuilder {
    api_url: String,
    comms_url: String,
    media_url: String,
    rate_capacity: f64,
    request_timeout: Duration,
    connect_timeout: Duration,
    download_timeout: Duration,
    limiter: Option<Arc<RateLimiter>>,
}

impl Default for CrescendoClientBuilder {
    fn default() -> Self {
        Self {
            api_url: network::DEFAULT_API_URL.to_string(),
            comms_url: network::DEFAULT_COMMS_URL.to_string(),
            media_url: network::DEFAULT_MEDIA_URL.to_string(),
            rate_capacity: MAX_REQUESTS_PER_SECOND,
            request_timeout: TOTAL_REQUEST_TIMEOUT,
            connect_timeout: CONNECT_REQUEST_TIMEOUT,
            download_timeout: TOTAL_DOWNLOAD_TIMEOUT,
            limiter: None,
        }
    }
}

impl CrescendoClientBuilder {
    pub fn api_url(mut self, url: &str) -> Self {
        self.api_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn comms_url(mut self, url: &str) -> Self {
        self.comms_url = url.trim_end_matches('/').to_string();
        self
    }

    pub fn media_url(mut self, url: &str) -> Self {
        self.media_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Requests admitted per second across this client.
    pub fn rate_capacity(mut self, capacity: f64) -> Self {
        self.rate_capacity = capacity;
        self
    }

    /// Share one limiter across several clients targeting the same account.
    /// Overrides `rate_capacity`.
    pub fn rate_limiter(mut self, limiter: Arc<RateLimiter>) -> Self {
        self.limiter = Some(limiter);
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    pub fn download_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    pub fn build(self) -> Result<CrescendoClient, SdkError> {
        let limiter = self
            .limiter
            .unwrap_or_else(|| Arc::new(RateLimiter::with_capacity(self.rate_capacity)));

        Ok(CrescendoClient {
            http: CrescendoHttp::with_timeouts(
                limiter,
                self.request_timeout,
                self.connect_timeout,
                self.download_timeout,
            )?,
            api_url: self.api_url,
            comms_url: self.comms_url,
            media_url: self.media_url,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation_uses_default_urls() {
        let client = CrescendoClient::new().unwrap();
        assert_eq!(client.api_url(), network::DEFAULT_API_URL);
        assert_eq!(client.comms_url(), network::DEFAULT_COMMS_URL);
        assert_eq!(client.media_url(), network::DEFAULT_MEDIA_URL);
    }

    #[test]
    fn test_builder_strips_trailing_slash() {
        let client = CrescendoClient::builder()
            .api_url("https://api.example.test/v1/")
            .comms_url("https://comms.example.test/v1/")
            .build()
            .unwrap();
        assert_eq!(client.api_url(), "https://api.example.test/v1");
        assert_eq!(client.comms_url(), "https://comms.example.test/v1");
    }

    #[test]
    fn test_builder_shares_limiter() {
        let limiter = Arc::new(RateLimiter::with_capacity(10.0));
        let first = CrescendoClient::builder()
            .rate_limiter(limiter.clone())
            .build()
            .unwrap();
        let second = CrescendoClient::builder()
            .rate_limiter(limiter.clone())
            .build()
            .unwrap();

        assert!(Arc::ptr_eq(&first.http.limiter, &limiter));
        assert!(Arc::ptr_eq(&second.http.limiter, &limiter));
    }
}
