//! Classification of non-2xx response bodies into [`ApiError`].
//!
//! The upstream APIs are inconsistent about error payload shapes: the
//! communications endpoints answer with `error_code`/`error_reason`/
//! `error_description`, the media endpoints with RFC 7807-style
//! `status`/`title`/`detail`, and a few token endpoints with plain
//! `error`/`message`. Each provider field is probed through an ordered
//! alias list; the first present, non-null alias wins.

use crate::error::{ApiError, ErrorKind};
use serde_json::Value;

const TYPE_ALIASES: &[&str] = &["type"];
const CODE_ALIASES: &[&str] = &["error_code", "status"];
const REASON_ALIASES: &[&str] = &["error_reason", "error"];
const DESCRIPTION_ALIASES: &[&str] = &["error_description", "message", "detail", "title"];

/// Turn a terminal `>= 400` response into an [`ApiError`].
///
/// Never fails: a missing or malformed body degrades to an error carrying
/// only the HTTP status and URL.
pub fn classify(status: u16, url: &str, body: Option<&[u8]>) -> ApiError {
    let parsed = body.and_then(|bytes| serde_json::from_slice::<Value>(bytes).ok());

    ApiError {
        status,
        kind: ErrorKind::from_status(status),
        error_type: extract(parsed.as_ref(), TYPE_ALIASES),
        error_code: extract(parsed.as_ref(), CODE_ALIASES),
        reason: extract(parsed.as_ref(), REASON_ALIASES),
        description: extract(parsed.as_ref(), DESCRIPTION_ALIASES),
        url: url.to_string(),
    }
}

fn extract(body: Option<&Value>, aliases: &[&str]) -> Option<String> {
    let object = body?.as_object()?;
    aliases
        .iter()
        .find_map(|name| object.get(*name).and_then(scalar_to_string))
}

/// Providers send codes as either numbers or strings; normalize both to the
/// decimal string form. Null and structured values count as absent.
fn scalar_to_string(value: &Value) -> Option<String> {
    match value {
        Value::String(text) => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "https://comms.api.crescendo.io/v1/monitor/conferences";

    #[test]
    fn test_communications_error_shape() {
        let body = br#"{"type":"ErrorResponse","error_code":7,"error_reason":"invalid_token","error_description":"Expired or invalid token"}"#;
        let error = classify(401, URL, Some(body));

        assert_eq!(error.status, 401);
        assert_eq!(error.kind, ErrorKind::Unauthorized);
        assert_eq!(error.error_type.as_deref(), Some("ErrorResponse"));
        assert_eq!(error.error_code.as_deref(), Some("7"));
        assert_eq!(error.reason.as_deref(), Some("invalid_token"));
        assert_eq!(
            error.description.as_deref(),
            Some("Expired or invalid token")
        );
    }

    #[test]
    fn test_media_error_shape_aliases_to_same_fields() {
        let comms = classify(400, URL, Some(br#"{"error_code":7,"message":"bad"}"#));
        let media = classify(400, URL, Some(br#"{"status":7,"detail":"bad"}"#));

        assert_eq!(comms.error_code, media.error_code);
        assert_eq!(comms.description, media.description);
        assert_eq!(comms.error_code.as_deref(), Some("7"));
        assert_eq!(comms.description.as_deref(), Some("bad"));
    }

    #[test]
    fn test_first_present_alias_wins() {
        let body = br#"{"error_description":"primary","message":"secondary","detail":"tertiary"}"#;
        let error = classify(400, URL, Some(body));
        assert_eq!(error.description.as_deref(), Some("primary"));
    }

    #[test]
    fn test_null_alias_falls_through() {
        let body = br#"{"error_reason":null,"error":"expired_token"}"#;
        let error = classify(400, URL, Some(body));
        assert_eq!(error.reason.as_deref(), Some("expired_token"));
    }

    #[test]
    fn test_title_is_last_description_alias() {
        let body = br#"{"type":"about:blank","title":"Bad Request","status":400}"#;
        let error = classify(400, URL, Some(body));
        assert_eq!(error.description.as_deref(), Some("Bad Request"));
        assert_eq!(error.error_code.as_deref(), Some("400"));
    }

    #[test]
    fn test_malformed_body_degrades_to_status_only() {
        let error = classify(500, URL, Some(b"<html>Internal Server Error</html>"));

        assert_eq!(error.status, 500);
        assert_eq!(error.kind, ErrorKind::Server);
        assert!(error.error_type.is_none());
        assert!(error.error_code.is_none());
        assert!(error.reason.is_none());
        assert!(error.description.is_none());
        assert_eq!(error.summary(), "Internal Server Error");
    }

    #[test]
    fn test_absent_body_degrades_to_status_only() {
        let error = classify(502, URL, None);
        assert!(error.description.is_none());
        assert_eq!(error.summary(), "Bad Gateway");
    }

    #[test]
    fn test_non_object_body_degrades_to_status_only() {
        let error = classify(400, URL, Some(b"[1,2,3]"));
        assert!(error.error_code.is_none());
        assert!(error.description.is_none());
    }
}
