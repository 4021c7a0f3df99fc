//! Async request helper for the Airtable REST API.
//!
//! # Overview
//! `Requester::send_request` takes a URL string, a method, headers and an
//! optional body, performs one HTTP call through an injected `Transport`,
//! and returns the raw response body together with a `StatusOutcome`
//! naming what the status code means for Airtable.
//!
//! # Design
//! - Only a bad URL or a failed transport call is an `Err`. 4xx/5xx
//!   statuses are returned as data for the caller to inspect.
//! - Headers and body go out exactly as given; no token or content type is
//!   injected.
//! - `UreqTransport` is the default transport; tests substitute their own.

pub mod error;
pub mod http;
pub mod requester;
pub mod status;
pub mod transport;
pub mod types;

pub use error::{RequestError, TransportError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use requester::Requester;
pub use status::StatusOutcome;
pub use transport::{Transport, UreqTransport};
pub use types::ErrorPayload;
