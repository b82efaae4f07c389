//! Error types for leadline-client

use thiserror::Error;

/// Result type alias for leadline-client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur talking to outbound services
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Transport-level failure (DNS, connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("{service} responded with HTTP {status}: {body}")]
    Status {
        /// Which integration answered
        service: &'static str,
        /// HTTP status code
        status: u16,
        /// Response body, truncated
        body: String,
    },
}

impl Error {
    /// Name of the service that produced a status error, if any.
    pub fn service(&self) -> Option<&'static str> {
        match self {
            Error::Status { service, .. } => Some(service),
            _ => None,
        }
    }
}
