//! Error types for leadline-cli

use thiserror::Error;

/// Result type alias for leadline-cli operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in leadline-cli
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from leadline-core
    #[error("Core error: {0}")]
    Core(#[from] leadline_core::Error),

    /// Error from the HTTP server
    #[error("Server error: {0}")]
    Api(#[from] leadline_api::Error),

    /// Failed to write command output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
