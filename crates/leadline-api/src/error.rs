//! Error types for leadline-api
//!
//! Every failure a handler can produce ends up here and is mapped onto one
//! of four coarse responses: 400 for missing fields, 405 for the wrong
//! method, 500 for everything else. Details of a 500 are logged and never
//! sent to the caller.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Result type alias for leadline-api operations
pub type Result<T> = std::result::Result<T, Error>;

/// Body sent to callers for any error.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Body sent for unsupported methods.
pub const METHOD_NOT_ALLOWED_MESSAGE: &str = "Method not allowed";

/// Errors that can occur in leadline-api
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Error from leadline-core
    #[error("Core error: {0}")]
    Core(#[from] leadline_core::Error),

    /// Error from an outbound integration
    #[error("Client error: {0}")]
    Client(#[from] leadline_client::Error),

    /// Template failed to render
    #[error("Template error: {0}")]
    Template(#[from] tera::Error),

    /// Socket or listener failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Request body could not be parsed at all
    #[error("Unreadable request body: {message}")]
    Body {
        /// Parser's description of the problem
        message: String,
    },

    /// Endpoint does not support the request method
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl Error {
    /// Creates a new body error.
    pub fn body<S: Into<String>>(message: S) -> Self {
        Error::Body {
            message: message.into(),
        }
    }

    /// HTTP status this error maps to.
    pub fn status(&self) -> StatusCode {
        match self {
            Error::Core(e) if e.is_client_error() => StatusCode::BAD_REQUEST,
            Error::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody<'a> {
    error: &'a str,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            Error::Core(leadline_core::Error::Validation { message, .. }) => message.as_str(),
            Error::MethodNotAllowed => METHOD_NOT_ALLOWED_MESSAGE,
            _ => {
                tracing::error!(error = %self, "request failed");
                INTERNAL_ERROR_MESSAGE
            }
        };
        (status, Json(ErrorBody { error: message })).into_response()
    }
}
