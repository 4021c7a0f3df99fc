//! Single-shot request dispatch for the Airtable REST API.
//!
//! # Design
//! `Requester` holds only its transport and carries no state between calls.
//! `send_request` parses the URL, hands one `HttpRequest` to the transport,
//! and classifies the status of whatever comes back. The body is returned
//! untouched whatever the status; deciding whether it is data or an error
//! payload is left to the caller.

use std::collections::HashMap;

use log::debug;
use url::Url;

use crate::error::RequestError;
use crate::http::{HttpMethod, HttpRequest};
use crate::status::StatusOutcome;
use crate::transport::{Transport, UreqTransport};

/// Sends requests through an injected `Transport`.
#[derive(Debug, Clone)]
pub struct Requester<T> {
    transport: T,
}

impl<T: Transport> Requester<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    /// Perform exactly one HTTP call and classify its status.
    ///
    /// Fails with `InvalidUrlString` before any I/O if `url` is not an
    /// absolute URL, and with `FailedRequest` if the transport did not
    /// produce a response. Error statuses are returned as `Ok`.
    pub async fn send_request(
        &self,
        url: &str,
        method: HttpMethod,
        headers: HashMap<String, String>,
        body: Option<Vec<u8>>,
    ) -> Result<(Vec<u8>, StatusOutcome), RequestError> {
        let url = Url::parse(url).map_err(|_| RequestError::InvalidUrlString)?;
        debug!("dispatching {method} {url}");

        let request = HttpRequest {
            method,
            url,
            headers: headers.into_iter().collect(),
            body,
        };

        let response = self.transport.execute(request).await.map_err(|e| {
            debug!("transport failed: {e}");
            RequestError::from(e)
        })?;

        let outcome = StatusOutcome::from_code(response.status);
        debug!("received {} ({outcome:?})", response.status);
        Ok((response.body, outcome))
    }
}

impl Default for Requester<UreqTransport> {
    fn default() -> Self {
        Self::new(UreqTransport::new())
    }
}
