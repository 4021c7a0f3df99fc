//! The network seam of the requester.
//!
//! # Design
//! `Requester` never reaches for a global client. It is constructed with a
//! `Transport`, and tests swap in one that records what it was asked to
//! send. `UreqTransport` is the production implementation.
//!
//! ureq is blocking, so each call runs on tokio's blocking pool and the
//! async caller suspends on the join handle. Polled outside a tokio runtime,
//! `UreqTransport` reports `TransportError::NoRuntime` instead of panicking.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;
use ureq::http::Request;
use ureq::Agent;

use crate::error::TransportError;
use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP round-trip.
///
/// Implementations must send the method, URL, headers and body exactly as
/// given and must return 4xx/5xx responses as `Ok`.
#[async_trait]
pub trait Transport: Send + Sync {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}

#[async_trait]
impl<T: Transport + ?Sized> Transport for Arc<T> {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        (**self).execute(request).await
    }
}

/// `Transport` backed by a ureq `Agent`.
#[derive(Clone)]
pub struct UreqTransport {
    agent: Agent,
}

impl UreqTransport {
    /// Agent with ureq defaults, except that error statuses are returned as
    /// responses instead of `Err`.
    pub fn new() -> Self {
        let agent = Agent::config_builder()
            .http_status_as_error(false)
            .build()
            .new_agent();
        Self { agent }
    }

    /// Use a caller-configured agent (proxy, timeouts, TLS).
    ///
    /// The agent should be built with `http_status_as_error(false)`;
    /// otherwise every 4xx/5xx surfaces as `RequestError::FailedRequest`.
    pub fn with_agent(agent: Agent) -> Self {
        Self { agent }
    }
}

impl fmt::Debug for UreqTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UreqTransport").finish_non_exhaustive()
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Transport for UreqTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let handle = tokio::runtime::Handle::try_current()
            .map_err(|e| TransportError::NoRuntime(e.to_string()))?;
        let agent = self.agent.clone();
        handle
            .spawn_blocking(move || execute_blocking(&agent, request))
            .await
            .map_err(|e| TransportError::Cancelled(e.to_string()))?
    }
}

fn execute_blocking(agent: &Agent, request: HttpRequest) -> Result<HttpResponse, TransportError> {
    let mut builder = Request::builder()
        .method(request.method.as_str())
        .uri(request.url.as_str());
    for (name, value) in &request.headers {
        builder = builder.header(name.as_str(), value.as_str());
    }

    let sent = match request.body {
        Some(body) => builder.body(body).map(|req| agent.run(req)),
        None => builder.body(()).map(|req| agent.run(req)),
    };
    let mut response = sent
        .map_err(|e| TransportError::InvalidRequest(e.to_string()))?
        .map_err(|e| TransportError::Io(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|e| TransportError::MalformedResponse(e.to_string()))?;

    Ok(HttpResponse { status, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::HttpMethod;

    fn request(url: &str, headers: Vec<(String, String)>) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            url: url.parse().unwrap(),
            headers,
            body: None,
        }
    }

    #[tokio::test]
    async fn connection_refused_is_io_error() {
        // Bind then drop to get a port nothing listens on.
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let err = UreqTransport::new()
            .execute(request(&format!("http://{addr}/v0/base/table"), Vec::new()))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::Io(_)), "got {err:?}");
    }

    #[tokio::test]
    async fn illegal_header_name_is_invalid_request() {
        let headers = vec![("bad header".to_string(), "value".to_string())];
        let err = UreqTransport::new()
            .execute(request("http://127.0.0.1:9/", headers))
            .await
            .unwrap_err();
        assert!(matches!(err, TransportError::InvalidRequest(_)), "got {err:?}");
    }

    #[test]
    fn outside_tokio_runtime_is_no_runtime_error() {
        let err = futures::executor::block_on(
            UreqTransport::new().execute(request("http://127.0.0.1:9/", Vec::new())),
        )
        .unwrap_err();
        assert!(matches!(err, TransportError::NoRuntime(_)), "got {err:?}");
    }
}
