//! Decoding of Airtable error bodies.
//!
//! # Design
//! The requester hands back raw bytes for every status. Airtable uses two
//! shapes for error bodies, a bare code (`{"error":"NOT_FOUND"}`) and an
//! object (`{"error":{"type":"...","message":"..."}}`). `ErrorPayload`
//! folds both into one struct for callers that want more than the
//! `StatusOutcome` message.

use serde::Deserialize;

/// An Airtable error body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorPayload {
    /// `NOT_FOUND`, `INVALID_REQUEST_UNKNOWN`, `AUTHENTICATION_REQUIRED`, ...
    pub kind: String,
    pub message: Option<String>,
}

#[derive(Deserialize)]
struct Envelope {
    error: RawError,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawError {
    Code(String),
    Detailed {
        #[serde(rename = "type")]
        kind: String,
        #[serde(default)]
        message: Option<String>,
    },
}

impl ErrorPayload {
    /// Returns `None` when the body is not JSON or has no `error` member.
    pub fn from_body(body: &[u8]) -> Option<Self> {
        let envelope: Envelope = serde_json::from_slice(body).ok()?;
        Some(match envelope.error {
            RawError::Code(kind) => ErrorPayload {
                kind,
                message: None,
            },
            RawError::Detailed { kind, message } => ErrorPayload { kind, message },
        })
    }
}
