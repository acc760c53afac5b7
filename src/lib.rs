//! # Crescendo SDK
//!
//! A Rust client for the Crescendo media & communications REST APIs.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Unified errors, network constants, credentials
//! 2. **HTTP** — `CrescendoHttp` executor: rate limiting, per-call retry
//!    policies, error classification, cursor pagination, streaming transfer
//! 3. **Domain** — Vertical slices per endpoint family (jobs, monitor,
//!    media I/O)
//! 4. **High-Level Client** — `CrescendoClient` with nested sub-clients
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use crescendo_sdk::prelude::*;
//!
//! let client = CrescendoClient::new()?;
//!
//! let token = client.auth().api_token(app_key, app_secret, None).await?;
//! let jobs = client
//!     .jobs()
//!     .list_all(&token.access_token, &JobsQuery::default())
//!     .await?;
//! ```
//!
//! Endpoints without a shipped sub-client are reached through the executor:
//!
//! ```rust,ignore
//! let spec = RequestSpec::get(format!("{}/conferences", client.comms_url()))
//!     .bearer(&token.access_token);
//! let body = client.http().execute(spec, RetryPolicy::Transient).await?;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

/// Authentication: credentials and token issuance.
pub mod auth;

// ── Layer 2: HTTP ────────────────────────────────────────────────────────────

/// HTTP request core: executor, rate limiting, retry, classification,
/// pagination, streaming transfer.
pub mod http;

// ── Layer 3: Domain ──────────────────────────────────────────────────────────

/// Domain modules (vertical slices): query types, wire types, sub-clients.
pub mod domain;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `CrescendoClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Errors
    pub use crate::error::{ApiError, ErrorKind, SdkError};

    // Auth
    pub use crate::auth::{AccessToken, Credential};

    // HTTP core
    pub use crate::http::{
        CrescendoHttp, Page, Paginator, RateLimiter, RequestBody, RequestSpec, RetryConfig,
        RetryPolicy,
    };

    // Domain types
    pub use crate::domain::jobs::{Job, JobsPage, JobsQuery};
    pub use crate::domain::monitor::{ConferenceSummary, ConferencesPage, ConferencesQuery};

    // Network
    pub use crate::network::{DEFAULT_API_URL, DEFAULT_COMMS_URL, DEFAULT_MEDIA_URL};

    // High-level client + sub-clients
    pub use crate::client::{
        AuthClient, CrescendoClient, CrescendoClientBuilder, JobsClient, MediaIoClient,
        MonitorClient,
    };
}
