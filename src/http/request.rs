//! Request descriptions handed to the HTTP executor.

use crate::auth::Credential;
use reqwest::Method;
use serde_json::Value;

/// Body of an outbound request.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    #[default]
    Empty,
    /// JSON-serialized value, sent as `application/json`.
    Json(Value),
    /// Pre-rendered body; the caller sets the content type header.
    Raw(String),
    /// `application/x-www-form-urlencoded` fields (token endpoint).
    Form(Vec<(String, String)>),
}

/// One API call: method, absolute URL, headers, query parameters, body and
/// credential. Built per call, discarded once the call completes.
///
/// Endpoint wrappers own URL construction and payload shaping; the executor
/// only renders what is described here onto the wire.
#[derive(Debug, Clone)]
pub struct RequestSpec {
    pub method: Method,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub body: RequestBody,
    pub auth: Option<Credential>,
}

impl RequestSpec {
    pub fn new(method: Method, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: Vec::new(),
            query: Vec::new(),
            body: RequestBody::Empty,
            auth: None,
        }
    }

    pub fn get(url: impl Into<String>) -> Self {
        Self::new(Method::GET, url)
    }

    pub fn post(url: impl Into<String>) -> Self {
        Self::new(Method::POST, url)
    }

    pub fn put(url: impl Into<String>) -> Self {
        Self::new(Method::PUT, url)
    }

    pub fn delete(url: impl Into<String>) -> Self {
        Self::new(Method::DELETE, url)
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    /// Append a query parameter only when a value is present.
    pub fn query_opt(self, name: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.query(name, value),
            None => self,
        }
    }

    pub fn bearer(mut self, token: impl Into<String>) -> Self {
        self.auth = Some(Credential::bearer(token));
        self
    }

    pub fn basic(mut self, app_key: impl Into<String>, app_secret: impl Into<String>) -> Self {
        self.auth = Some(Credential::key_secret(app_key, app_secret));
        self
    }

    pub fn credential(mut self, credential: Credential) -> Self {
        self.auth = Some(credential);
        self
    }

    pub fn json(mut self, value: Value) -> Self {
        self.body = RequestBody::Json(value);
        self
    }

    pub fn raw(mut self, body: impl Into<String>) -> Self {
        self.body = RequestBody::Raw(body.into());
        self
    }

    pub fn form(mut self, fields: Vec<(String, String)>) -> Self {
        self.body = RequestBody::Form(fields);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_builder_accumulates_query_and_headers() {
        let spec = RequestSpec::get("https://comms.api.crescendo.io/v1/monitor/conferences")
            .query("from", "0")
            .query_opt("alias", Some("demo.*"))
            .query_opt("exid", None)
            .header("Accept", "application/json");

        assert_eq!(spec.method, Method::GET);
        assert_eq!(
            spec.query,
            vec![
                ("from".to_string(), "0".to_string()),
                ("alias".to_string(), "demo.*".to_string()),
            ]
        );
        assert_eq!(spec.headers.len(), 1);
    }

    #[test]
    fn test_bearer_sets_credential() {
        let spec = RequestSpec::post("https://api.crescendo-media.io/media/input")
            .bearer("token")
            .json(json!({"url": "crs://in.wav"}));

        assert_eq!(spec.auth, Some(Credential::bearer("token")));
        assert!(matches!(spec.body, RequestBody::Json(_)));
    }
}
