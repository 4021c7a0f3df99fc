//! HTTP request and response types exchanged with a `Transport`.
//!
//! # Design
//! Requests and responses are plain data. The `Requester` builds an
//! `HttpRequest` from the caller's descriptor and hands it to whatever
//! transport it was constructed with; the transport hands back an
//! `HttpResponse` carrying only what the classification step reads: the
//! numeric status and the raw body bytes.
//!
//! All fields use owned types so values can move into a blocking worker
//! without lifetime concerns.

use std::fmt;

use url::Url;

/// HTTP method for a request. The Airtable REST API only needs these four.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Post,
    Delete,
    Patch,
}

impl HttpMethod {
    /// Canonical uppercase wire string.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound HTTP request described as plain data.
///
/// Headers and body are sent exactly as given. Nothing is added on the way
/// out, so callers supply their own `Authorization` and `Content-Type`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: Url,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// An HTTP response described as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}
