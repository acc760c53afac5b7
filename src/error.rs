//! Unified SDK error types.

use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    /// Network-level failure before an HTTP status existed: DNS resolution,
    /// connection refused, TLS handshake, or a per-attempt timeout that
    /// exhausted its retries.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered with a terminal `>= 400` status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The request could not be built (e.g. an invalid header name).
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// A response body did not match the expected wire shape.
    #[error("unexpected response shape: {0}")]
    Serde(#[from] serde_json::Error),

    /// Local file I/O failure during a streaming transfer.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

/// Category derived from the HTTP status code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    BadRequest,
    Unauthorized,
    Forbidden,
    NotFound,
    Conflict,
    RateLimited,
    Server,
    Other,
}

impl ErrorKind {
    pub fn from_status(status: u16) -> Self {
        match status {
            400 => Self::BadRequest,
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            409 => Self::Conflict,
            429 => Self::RateLimited,
            500..=599 => Self::Server,
            _ => Self::Other,
        }
    }
}

/// Classified API error — the only error surfaced for a terminal `>= 400`
/// response, whatever payload shape the endpoint used.
///
/// The provider fields are populated by [`classify`](crate::http::classify::classify)
/// when the response body carried them; a malformed or absent body leaves
/// them `None` and the error falls back to the generic HTTP status text.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("HTTP {status} calling {url}: {}", self.summary())]
pub struct ApiError {
    pub status: u16,
    pub kind: ErrorKind,
    /// Provider error type URI, when present.
    pub error_type: Option<String>,
    /// Provider error code, normalized to its decimal string form.
    pub error_code: Option<String>,
    pub reason: Option<String>,
    pub description: Option<String>,
    pub url: String,
}

impl ApiError {
    /// Most specific human-readable message available.
    pub fn summary(&self) -> &str {
        self.description
            .as_deref()
            .or(self.reason.as_deref())
            .unwrap_or_else(|| status_text(self.status))
    }
}

fn status_text(status: u16) -> &'static str {
    reqwest::StatusCode::from_u16(status)
        .ok()
        .and_then(|code| code.canonical_reason())
        .unwrap_or("Unknown Error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_status() {
        assert_eq!(ErrorKind::from_status(400), ErrorKind::BadRequest);
        assert_eq!(ErrorKind::from_status(401), ErrorKind::Unauthorized);
        assert_eq!(ErrorKind::from_status(404), ErrorKind::NotFound);
        assert_eq!(ErrorKind::from_status(429), ErrorKind::RateLimited);
        assert_eq!(ErrorKind::from_status(503), ErrorKind::Server);
        assert_eq!(ErrorKind::from_status(418), ErrorKind::Other);
    }

    #[test]
    fn test_summary_prefers_description() {
        let error = ApiError {
            status: 400,
            kind: ErrorKind::BadRequest,
            error_type: None,
            error_code: None,
            reason: Some("invalid_request".to_string()),
            description: Some("Alias is malformed".to_string()),
            url: "https://comms.api.crescendo.io/v1/conferences".to_string(),
        };
        assert_eq!(error.summary(), "Alias is malformed");
    }

    #[test]
    fn test_summary_falls_back_to_status_text() {
        let error = ApiError {
            status: 503,
            kind: ErrorKind::Server,
            error_type: None,
            error_code: None,
            reason: None,
            description: None,
            url: "https://api.crescendo.io/v1/auth/token".to_string(),
        };
        assert_eq!(error.summary(), "Service Unavailable");
    }
}
