//! Leadline Core — request schemas, configuration, lead records, and spam
//! heuristics shared by the Leadline crates.
//!
//! This crate does no I/O. Everything in it is a pure transform over a
//! single request plus the process-wide [`Config`].
//!
//! # Modules
//!
//! - [`config`]: Immutable configuration and notification backend selection
//! - [`error`]: Error types and Result alias
//! - [`lead`]: CRM lead records built from submissions and events
//! - [`spam`]: Honeypot, timing, and gibberish-name checks
//! - [`submission`]: Lenient request schemas and validation

pub mod config;
pub mod error;
pub mod lead;
pub mod spam;
pub mod submission;

mod proptests;

// Re-export key types at crate root for convenience
pub use config::{Config, NotifyBackend};
pub use error::{Error, Result};
pub use lead::{ContactLead, EventLead, LeadRecord};
pub use spam::{classify, classify_at, is_gibberish, SpamReason, SpamVerdict};
pub use submission::{Inquiry, Submission, TrackingEvent};
