//! Page error types
//!
//! Failures while binding to, or writing into, the host document.

use thiserror::Error;

use crate::transport::RequestError;

/// Errors raised by the page layer
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PageError {
    /// A required element is not in the markup
    #[error("Missing element: {0}")]
    MissingElement(String),

    /// The host document rejected an operation
    #[error("DOM error: {0}")]
    Dom(String),

    /// The server-injected initial payload could not be read
    #[error("Invalid initial payload: {0}")]
    InvalidPayload(String),
}

impl From<serde_json::Error> for PageError {
    fn from(err: serde_json::Error) -> Self {
        PageError::InvalidPayload(err.to_string())
    }
}

/// Result type alias for page operations
pub type PageResult<T> = Result<T, PageError>;

/// Errors surfaced by the feed driver
///
/// Displays the underlying message unchanged, so a failed load reports
/// exactly what the server said.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FeedError {
    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Page(#[from] PageError),
}
