//! Transport error types
//!
//! Every failure surfaces to the page as a single human-readable string,
//! which is the `Display` of [`RequestError`].

use thiserror::Error;

/// Message shown when the exchange itself failed or returned garbage
pub const FAILURE_MESSAGE: &str = "Error communicating with the server.";

/// Errors produced by a single request/response exchange
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RequestError {
    /// The request never completed (connection refused, DNS, CORS, ...)
    #[error("{}", FAILURE_MESSAGE)]
    Network(String),

    /// The response body was not JSON, or not the JSON we expected
    #[error("{}", FAILURE_MESSAGE)]
    InvalidBody(String),

    /// A base URL or pagination link that cannot be parsed; the request
    /// was never sent
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// The server answered with a status outside `[200, 400)`
    #[error("{message}")]
    Status { status: u16, message: String },
}

impl RequestError {
    /// True for failures of the exchange itself, as opposed to an
    /// application error reported by the server.
    pub fn is_transport_failure(&self) -> bool {
        matches!(
            self,
            RequestError::Network(_) | RequestError::InvalidBody(_) | RequestError::InvalidUrl(_)
        )
    }

    /// Underlying detail, useful for diagnostics. For status errors this
    /// is the server message.
    pub fn detail(&self) -> &str {
        match self {
            RequestError::Network(detail)
            | RequestError::InvalidBody(detail)
            | RequestError::InvalidUrl(detail) => detail,
            RequestError::Status { message, .. } => message,
        }
    }
}

impl From<serde_json::Error> for RequestError {
    fn from(err: serde_json::Error) -> Self {
        RequestError::InvalidBody(err.to_string())
    }
}

/// Result type alias for transport operations
pub type RequestResult<T> = Result<T, RequestError>;
