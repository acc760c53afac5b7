//! Authentication — caller-owned credentials and API token issuance.
//!
//! The SDK never rotates or stores credentials: each [`RequestSpec`]
//! carries its own [`Credential`] for the lifetime of one call.
//!
//! [`RequestSpec`]: crate::http::request::RequestSpec

pub mod client;

use serde::{Deserialize, Serialize};

/// Credential attached to a single request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Credential {
    /// Opaque bearer token obtained from the token endpoint.
    Bearer(String),
    /// App key/secret pair, rendered as an HTTP Basic header.
    KeySecret { app_key: String, app_secret: String },
}

impl Credential {
    pub fn bearer(token: impl Into<String>) -> Self {
        Self::Bearer(token.into())
    }

    pub fn key_secret(app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        Self::KeySecret {
            app_key: app_key.into(),
            app_secret: app_secret.into(),
        }
    }
}

/// API token returned by `POST /v1/auth/token`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    #[serde(default)]
    pub token_type: Option<String>,
    /// Token lifetime in seconds.
    #[serde(default)]
    pub expires_in: u64,
}
