//! Error types for the `github-webhook-auth` crate.
//!
//! Follows the root Error struct + error kind enum pattern: the `source`
//! field holds the originating error for chaining, `error_kind` carries the
//! category callers match on.

use std::error::Error as StdError;
use std::fmt;

/// Top-level error type for the crate.
///
/// The only raisable condition is caller misuse: handing the validator
/// something that is not a request object. Every semantic mismatch (bad
/// signature, wrong event, wrong action) surfaces as a `false` verdict, not
/// an error.
#[derive(Debug)]
pub struct Error {
    pub source: Option<Box<dyn StdError + Send + Sync>>,
    pub error_kind: ErrorKind,
}

/// Major categories of errors in the crate.
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    Request(RequestErrorKind),
}

/// Errors from interpreting the request argument.
#[derive(Debug, PartialEq)]
pub enum RequestErrorKind {
    /// No request value was provided (null).
    Missing,
    /// The request value is not an object.
    NotAnObject,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match &self.error_kind {
            ErrorKind::Request(RequestErrorKind::Missing)
            | ErrorKind::Request(RequestErrorKind::NotAnObject) => {
                write!(f, "expected first argument to be a request object")
            }
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}

/// Helper function to create request errors.
pub fn request_error(kind: RequestErrorKind) -> Error {
    Error {
        source: None,
        error_kind: ErrorKind::Request(kind),
    }
}
