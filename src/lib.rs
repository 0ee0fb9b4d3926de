//! # github-webhook-auth
//!
//! Validation of inbound GitHub webhook requests:
//! - HMAC-SHA1 signature verification against the `x-hub-signature` header,
//!   with constant-time digest comparison
//! - payload-shape classification against named webhook event kinds
//! - exact matching of the payload's `action` field
//!
//! The crate consumes an already-parsed request (header map + decoded JSON
//! body) and returns a boolean verdict. Reading sockets, routing, and
//! deciding what to do with a rejected delivery belong to the HTTP framework
//! in front of it.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use github_webhook_auth::{validate, ValidationOptions, WebhookRequest};
//!
//! async fn webhook(headers: HeaderMap, Json(body): Json<Value>) -> StatusCode {
//!     let request = WebhookRequest::new(
//!         headers
//!             .iter()
//!             .map(|(name, value)| (name.as_str(), value.to_str().unwrap_or(""))),
//!         body,
//!     );
//!
//!     let options = ValidationOptions::new()
//!         .with_secret("my-secret")
//!         .with_event("issues")
//!         .with_action("opened");
//!
//!     if validate(&request, &options) {
//!         StatusCode::OK
//!     } else {
//!         StatusCode::INTERNAL_SERVER_ERROR
//!     }
//! }
//! ```

pub mod error;
pub mod event;
pub mod request;
pub mod signature;
pub mod validator;

// Re-export commonly used types
pub use error::{Error, ErrorKind};
pub use request::WebhookRequest;
pub use validator::{validate, EventFilter, EventMatch, ValidationOptions};
