//! Error types for the Airtable requester.
//!
//! # Design
//! Only two things can make a request fail: the URL text does not parse, or
//! the transport never produced a usable HTTP response. Error statuses such
//! as 404 or 429 are not failures here; they come back as a `StatusOutcome`
//! next to the body.
//!
//! `TransportError` keeps whatever detail the transport had. The requester
//! logs it and then collapses it into `RequestError::FailedRequest`.

use thiserror::Error;

/// Errors returned by `Requester::send_request`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RequestError {
    /// The URL text could not be parsed into an absolute URL. No request
    /// was attempted.
    #[error("invalid URL string")]
    InvalidUrlString,

    /// The transport call did not complete or did not yield a well-formed
    /// HTTP response.
    #[error("request failed")]
    FailedRequest,
}

/// Errors a `Transport` may report.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The descriptor could not be turned into a wire request, for example
    /// a header name with illegal characters.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// Connection, DNS, TLS or protocol failure.
    #[error("transport I/O failed: {0}")]
    Io(String),

    /// A response arrived but its body could not be read.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// The future was polled outside a tokio runtime, so no blocking worker
    /// was available.
    #[error("no tokio runtime available: {0}")]
    NoRuntime(String),

    /// The worker executing the call was cancelled or panicked.
    #[error("request was cancelled: {0}")]
    Cancelled(String),
}

impl From<TransportError> for RequestError {
    fn from(_: TransportError) -> Self {
        RequestError::FailedRequest
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_transport_error_collapses_to_failed_request() {
        let errors = [
            TransportError::InvalidRequest("bad header name".to_string()),
            TransportError::Io("connection refused".to_string()),
            TransportError::MalformedResponse("truncated body".to_string()),
            TransportError::NoRuntime("no reactor running".to_string()),
            TransportError::Cancelled("task aborted".to_string()),
        ];
        for err in errors {
            assert_eq!(RequestError::from(err), RequestError::FailedRequest);
        }
    }

    #[test]
    fn display_strings() {
        assert_eq!(RequestError::InvalidUrlString.to_string(), "invalid URL string");
        assert_eq!(RequestError::FailedRequest.to_string(), "request failed");
        assert_eq!(
            TransportError::Io("refused".to_string()).to_string(),
            "transport I/O failed: refused"
        );
    }
}
