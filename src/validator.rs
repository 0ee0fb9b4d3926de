//! Webhook request validation.

use secrecy::SecretString;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use crate::event;
use crate::request::WebhookRequest;
use crate::signature;

/// Event filter: a single event name or a list of names.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum EventFilter {
    One(String),
    Many(Vec<String>),
}

impl EventFilter {
    /// The filtered event names as a slice; a single name becomes a
    /// one-element slice.
    pub fn names(&self) -> &[String] {
        match self {
            EventFilter::One(name) => std::slice::from_ref(name),
            EventFilter::Many(names) => names,
        }
    }
}

impl From<&str> for EventFilter {
    fn from(name: &str) -> Self {
        EventFilter::One(name.to_string())
    }
}

impl From<String> for EventFilter {
    fn from(name: String) -> Self {
        EventFilter::One(name)
    }
}

impl From<Vec<String>> for EventFilter {
    fn from(names: Vec<String>) -> Self {
        EventFilter::Many(names)
    }
}

/// How a multi-name event filter combines its rules.
///
/// `All` requires every listed name to match the payload. Documented event
/// shapes are mutually exclusive, so an `All` filter listing more than one
/// name rejects nearly every payload; use `Any` for "matches any of these
/// events".
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventMatch {
    #[default]
    All,
    Any,
}

/// Validation options. Absent fields mean "do not check this dimension";
/// with nothing configured every request passes.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ValidationOptions {
    /// Shared secret the sender signed the payload with. When set, the
    /// `x-hub-signature` header must carry a valid HMAC-SHA1 of the body.
    pub secret: Option<SecretString>,
    /// Event kind(s) the payload shape must match.
    pub event: Option<EventFilter>,
    /// Exact value the payload's `action` field must carry.
    pub action: Option<String>,
    /// Combination rule for a multi-name event filter.
    pub event_match: EventMatch,
}

impl ValidationOptions {
    /// Options with no checks configured.
    pub fn new() -> Self {
        Self::default()
    }

    /// Require a valid payload signature under `secret`.
    pub fn with_secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(SecretString::new(secret.into()));
        self
    }

    /// Require the payload to match the given event kind(s).
    pub fn with_event(mut self, event: impl Into<EventFilter>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Require the payload's `action` field to equal `action` exactly.
    pub fn with_action(mut self, action: impl Into<String>) -> Self {
        self.action = Some(action.into());
        self
    }

    /// Set how a multi-name event filter combines its rules.
    pub fn with_event_match(mut self, event_match: EventMatch) -> Self {
        self.event_match = event_match;
        self
    }
}

/// Validate a webhook request against the configured checks.
///
/// Checks run in order (signature, event filter, action filter) and stop at
/// the first failure. Every mismatch yields `false`; nothing here errors.
///
/// # Arguments
///
/// * `request` - The parsed request (headers + body)
/// * `options` - Checks to apply
///
/// # Returns
///
/// `true` when every configured check passes.
pub fn validate(request: &WebhookRequest, options: &ValidationOptions) -> bool {
    if let Some(secret) = &options.secret {
        // A missing header is an empty signature, which never verifies.
        let header = request.header(signature::SIGNATURE_HEADER).unwrap_or("");
        let payload = serialize_body(request.body());

        if !signature::verify(&payload, header, secret) {
            debug!(header = signature::SIGNATURE_HEADER, "signature mismatch");
            return false;
        }
    }

    if let Some(filter) = &options.event {
        if !event_filter_matches(filter, options.event_match, request.body()) {
            debug!(?filter, "event filter did not match payload shape");
            return false;
        }
    }

    if let Some(action) = &options.action {
        if request.action() != Some(action.as_str()) {
            debug!(expected = %action, "action filter did not match");
            return false;
        }
    }

    true
}

/// An empty name list constrains nothing under either combination rule.
fn event_filter_matches(filter: &EventFilter, event_match: EventMatch, body: &Value) -> bool {
    let names = filter.names();
    if names.is_empty() {
        return true;
    }

    match event_match {
        EventMatch::All => names.iter().all(|name| event::matches(name, body)),
        EventMatch::Any => names.iter().any(|name| event::matches(name, body)),
    }
}

/// Serialize the body exactly as the sender signed it: compact JSON, object
/// keys in received order.
fn serialize_body(body: &Value) -> Vec<u8> {
    serde_json::to_vec(body).unwrap_or_default()
}
