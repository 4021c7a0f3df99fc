//! Classification of Airtable HTTP status codes.
//!
//! # Design
//! `StatusOutcome::from_code` is total: every `u16` maps to a variant, and
//! anything outside the documented Airtable set lands in `UnknownResponse`.
//! Messages are `&'static str` so the table lives entirely in the binary.

use std::fmt;

/// Named outcome for the status code of an Airtable API response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusOutcome {
    Ok,
    BadRequest,
    Unauthorized,
    PaymentRequired,
    Forbidden,
    NotFound,
    RequestEntityTooLarge,
    InvalidRequest,
    TooManyRequests,
    InternalServerError,
    BadGateway,
    ServiceUnavailable,
    UnknownResponse,
}

impl StatusOutcome {
    pub fn from_code(code: u16) -> Self {
        match code {
            200 => StatusOutcome::Ok,
            400 => StatusOutcome::BadRequest,
            401 => StatusOutcome::Unauthorized,
            402 => StatusOutcome::PaymentRequired,
            403 => StatusOutcome::Forbidden,
            404 => StatusOutcome::NotFound,
            413 => StatusOutcome::RequestEntityTooLarge,
            422 => StatusOutcome::InvalidRequest,
            429 => StatusOutcome::TooManyRequests,
            500 => StatusOutcome::InternalServerError,
            502 => StatusOutcome::BadGateway,
            503 => StatusOutcome::ServiceUnavailable,
            _ => StatusOutcome::UnknownResponse,
        }
    }

    /// The documented status code, or `None` for `UnknownResponse`.
    pub fn code(&self) -> Option<u16> {
        match self {
            StatusOutcome::Ok => Some(200),
            StatusOutcome::BadRequest => Some(400),
            StatusOutcome::Unauthorized => Some(401),
            StatusOutcome::PaymentRequired => Some(402),
            StatusOutcome::Forbidden => Some(403),
            StatusOutcome::NotFound => Some(404),
            StatusOutcome::RequestEntityTooLarge => Some(413),
            StatusOutcome::InvalidRequest => Some(422),
            StatusOutcome::TooManyRequests => Some(429),
            StatusOutcome::InternalServerError => Some(500),
            StatusOutcome::BadGateway => Some(502),
            StatusOutcome::ServiceUnavailable => Some(503),
            StatusOutcome::UnknownResponse => None,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            StatusOutcome::Ok => "Request completed successfully.",
            StatusOutcome::BadRequest => {
                "The request encoding is invalid; the request can't be parsed as a valid JSON."
            }
            StatusOutcome::Unauthorized => {
                "Accessing a protected resource without authorization or with invalid credentials."
            }
            StatusOutcome::PaymentRequired => {
                "The account associated with the API key making requests hits a quota that can be increased by upgrading the Airtable account plan."
            }
            StatusOutcome::Forbidden => {
                "Accessing a protected resource with API credentials that don't have access to that resource."
            }
            StatusOutcome::NotFound => "Route or resource is not found.",
            StatusOutcome::RequestEntityTooLarge => {
                "The request exceeded the maximum allowed payload size."
            }
            StatusOutcome::InvalidRequest => "The request data is invalid.",
            StatusOutcome::TooManyRequests => "Rate limit exceeded. Please try again later.",
            StatusOutcome::InternalServerError => "The server encountered an unexpected condition.",
            StatusOutcome::BadGateway => {
                "Airtable's servers are restarting or an unexpected outage is in progress."
            }
            StatusOutcome::ServiceUnavailable => {
                "The server could not process your request in time. The server could be temporarily unavailable, or it could have timed out processing your request."
            }
            StatusOutcome::UnknownResponse => "Unknown response.",
        }
    }

    /// Only `Ok` means the body holds the requested data.
    pub fn is_success(&self) -> bool {
        matches!(self, StatusOutcome::Ok)
    }
}

impl fmt::Display for StatusOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}
