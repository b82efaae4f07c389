//! Error types for leadline-core

use thiserror::Error;

/// Result type alias for leadline-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in leadline-core
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// A submission failed validation.
    #[error("Validation error: {message}")]
    Validation {
        /// What went wrong
        message: String,
    },

    /// Configuration value is missing or malformed
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },
}

impl Error {
    /// Creates a new validation error.
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Error::Validation {
            message: message.into(),
        }
    }

    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Whether the error was caused by the caller's input (vs. the server).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }
}
