//! In-memory stand-in for every outbound integration.
//!
//! [`MockOutbound`] implements [`EmailSender`], [`ChatNotifier`], and
//! [`LeadSink`] at once and records each call, so tests can assert on what
//! would have been sent. A failing mock records the call and then returns an
//! error, which is how downstream outages are simulated.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use leadline_core::LeadRecord;

use crate::chat::ChatNotifier;
use crate::crm::LeadSink;
use crate::email::{EmailSender, OutboundEmail};
use crate::{Error, Result};

/// Recording mock for email, chat, and CRM calls.
#[derive(Debug, Default)]
pub struct MockOutbound {
    fail: bool,
    emails: Mutex<Vec<OutboundEmail>>,
    chats: Mutex<Vec<String>>,
    leads: Mutex<Vec<LeadRecord>>,
}

impl MockOutbound {
    /// A mock where every call succeeds.
    pub fn new() -> Self {
        Self::default()
    }

    /// A mock where every call fails with HTTP 503.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Emails sent so far.
    pub fn emails(&self) -> Vec<OutboundEmail> {
        lock(&self.emails).clone()
    }

    /// Chat messages posted so far.
    pub fn chat_messages(&self) -> Vec<String> {
        lock(&self.chats).clone()
    }

    /// Leads submitted so far.
    pub fn leads(&self) -> Vec<LeadRecord> {
        lock(&self.leads).clone()
    }

    /// Total calls across all integrations.
    pub fn call_count(&self) -> usize {
        lock(&self.emails).len() + lock(&self.chats).len() + lock(&self.leads).len()
    }

    fn outcome(&self, service: &'static str) -> Result<()> {
        if self.fail {
            Err(Error::Status {
                service,
                status: 503,
                body: "mock outage".to_string(),
            })
        } else {
            Ok(())
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait]
impl EmailSender for MockOutbound {
    async fn send(&self, email: &OutboundEmail) -> Result<()> {
        lock(&self.emails).push(email.clone());
        self.outcome("mock-email")
    }
}

#[async_trait]
impl ChatNotifier for MockOutbound {
    async fn post(&self, text: &str) -> Result<()> {
        lock(&self.chats).push(text.to_string());
        self.outcome("mock-chat")
    }
}

#[async_trait]
impl LeadSink for MockOutbound {
    async fn submit(&self, lead: &LeadRecord) -> Result<()> {
        lock(&self.leads).push(lead.clone());
        self.outcome("mock-crm")
    }
}
