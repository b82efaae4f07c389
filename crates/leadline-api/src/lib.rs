//! # leadline-api
//!
//! HTTP server for Leadline contact forms and click tracking.
//!
//! This crate provides:
//! - `POST /api/contact` with spam screening, validation, and outbound relay
//! - `POST /api/track` forwarding click events to the CRM
//! - CORS and preflight handling for cross-origin form posts
//! - HTML or JSON acknowledgements chosen by the `Accept` header

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod body;
pub mod error;
pub mod middleware;
pub mod relay;
pub mod routes;
pub mod server;
pub mod state;
pub mod templates;

pub use error::{Error, Result};
pub use routes::router;
pub use server::Server;
pub use state::{AppState, Outbound};
