//! Webhook request representation.

use std::collections::HashMap;

use serde_json::Value;

use crate::error::{request_error, Error, RequestErrorKind};

/// An already-parsed webhook request: a header map and a decoded JSON body.
///
/// The validator never reads sockets; the HTTP framework in front of it
/// parses the raw request and hands the pieces over here. Header lookups are
/// case-insensitive, matching HTTP header semantics.
#[derive(Debug, Clone)]
pub struct WebhookRequest {
    headers: HashMap<String, String>,
    body: Value,
}

impl WebhookRequest {
    /// Create a request from header name/value pairs and a parsed JSON body.
    ///
    /// Header names are normalized to ASCII lowercase at construction so
    /// later lookups are case-insensitive.
    pub fn new<I, K, V>(headers: I, body: Value) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let headers = headers
            .into_iter()
            .map(|(name, value)| (name.as_ref().to_ascii_lowercase(), value.into()))
            .collect();

        Self { headers, body }
    }

    /// Build a request from a loosely-typed `{"headers": {..}, "body": ..}`
    /// value, the shape an HTTP framework typically hands over.
    ///
    /// Missing `headers` or `body` fields default to empty; non-string
    /// header values are skipped.
    ///
    /// # Returns
    ///
    /// The request, or a request error when the value is null or not an
    /// object.
    pub fn from_value(value: Value) -> Result<Self, Error> {
        let mut map = match value {
            Value::Object(map) => map,
            Value::Null => return Err(request_error(RequestErrorKind::Missing)),
            _ => return Err(request_error(RequestErrorKind::NotAnObject)),
        };

        let headers = match map.remove("headers") {
            Some(Value::Object(entries)) => entries
                .into_iter()
                .filter_map(|(name, value)| match value {
                    Value::String(value) => Some((name.to_ascii_lowercase(), value)),
                    _ => None,
                })
                .collect(),
            _ => HashMap::new(),
        };
        let body = map.remove("body").unwrap_or(Value::Null);

        Ok(Self { headers, body })
    }

    /// Look up a header value by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_ascii_lowercase())
            .map(String::as_str)
    }

    /// The parsed request body.
    pub fn body(&self) -> &Value {
        &self.body
    }

    /// The body's `action` field, when present and a string.
    pub fn action(&self) -> Option<&str> {
        self.body.get("action").and_then(Value::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_header_lookup_case_insensitive() {
        let request = WebhookRequest::new(
            [("X-Hub-Signature", "sha1=abcd")],
            json!({"action": "opened"}),
        );

        assert_eq!(request.header("x-hub-signature"), Some("sha1=abcd"));
        assert_eq!(request.header("X-HUB-SIGNATURE"), Some("sha1=abcd"));
        assert_eq!(request.header("x-github-event"), None);
    }

    #[test]
    fn test_action_accessor() {
        let request = WebhookRequest::new(
            std::iter::empty::<(&str, String)>(),
            json!({"action": "opened"}),
        );
        assert_eq!(request.action(), Some("opened"));

        let request =
            WebhookRequest::new(std::iter::empty::<(&str, String)>(), json!({"ref": "main"}));
        assert_eq!(request.action(), None);
    }

    #[test]
    fn test_from_value() {
        let request = WebhookRequest::from_value(json!({
            "headers": {"X-Hub-Signature": "sha1=abcd"},
            "body": {"action": "opened"}
        }))
        .unwrap();

        assert_eq!(request.header("x-hub-signature"), Some("sha1=abcd"));
        assert_eq!(request.action(), Some("opened"));
    }

    #[test]
    fn test_from_value_missing_request() {
        let err = WebhookRequest::from_value(Value::Null).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected first argument to be a request object"
        );
    }

    #[test]
    fn test_from_value_not_an_object() {
        let err = WebhookRequest::from_value(json!("not a request")).unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected first argument to be a request object"
        );
    }

    #[test]
    fn test_from_value_missing_fields_default_empty() {
        let request = WebhookRequest::from_value(json!({})).unwrap();
        assert_eq!(request.header("x-hub-signature"), None);
        assert!(request.body().is_null());
    }
}
