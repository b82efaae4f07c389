//! # leadline-client
//!
//! Outbound integrations for Leadline.
//!
//! Each integration sits behind a small async trait so handlers can be
//! exercised without a network:
//! - [`EmailSender`] — transactional email ([`SendGridClient`])
//! - [`ChatNotifier`] — team chat messages ([`TelegramClient`])
//! - [`LeadSink`] — CRM lead ingestion ([`SuperToolClient`])
//!
//! [`MockOutbound`] implements all three for tests.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod chat;
pub mod client;
pub mod crm;
pub mod email;
pub mod error;
pub mod mock;

pub use chat::{ChatNotifier, TelegramClient};
pub use client::http_client;
pub use crm::{LeadSink, SuperToolClient};
pub use email::{EmailSender, OutboundEmail, SendGridClient};
pub use error::{Error, Result};
pub use mock::MockOutbound;
