//! Email delivery through the SendGrid v3 mail-send API.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::ensure_success;
use crate::Result;

const SERVICE: &str = "sendgrid";

/// A rendered HTML email ready to hand to a provider.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutboundEmail {
    /// Recipient address.
    pub to: String,
    /// Sender address.
    pub from: String,
    /// Address replies should go to, if not the sender.
    pub reply_to: Option<String>,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub html: String,
}

/// Something that can deliver an [`OutboundEmail`].
#[async_trait]
pub trait EmailSender: Send + Sync {
    /// Deliver one email.
    async fn send(&self, email: &OutboundEmail) -> Result<()>;
}

/// SendGrid-backed [`EmailSender`].
#[derive(Clone)]
pub struct SendGridClient {
    http: reqwest::Client,
    api_key: String,
    endpoint: String,
}

impl SendGridClient {
    /// Create a client posting to `endpoint` with the given API key.
    pub fn new(http: reqwest::Client, api_key: impl Into<String>, endpoint: impl Into<String>) -> Self {
        Self {
            http,
            api_key: api_key.into(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl EmailSender for SendGridClient {
    async fn send(&self, email: &OutboundEmail) -> Result<()> {
        tracing::debug!(to = %email.to, subject = %email.subject, "sending email");
        let response = self
            .http
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&MailSend::from(email))
            .send()
            .await?;
        ensure_success(SERVICE, response).await
    }
}

// ============================================================================
// Wire format
// ============================================================================

#[derive(Serialize)]
struct MailSend<'a> {
    personalizations: [Personalization<'a>; 1],
    from: Address<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply_to: Option<Address<'a>>,
    subject: &'a str,
    content: [Content<'a>; 1],
}

#[derive(Serialize)]
struct Personalization<'a> {
    to: [Address<'a>; 1],
}

#[derive(Serialize)]
struct Address<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct Content<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    value: &'a str,
}

impl<'a> From<&'a OutboundEmail> for MailSend<'a> {
    fn from(email: &'a OutboundEmail) -> Self {
        Self {
            personalizations: [Personalization {
                to: [Address { email: &email.to }],
            }],
            from: Address { email: &email.from },
            reply_to: email.reply_to.as_deref().map(|email| Address { email }),
            subject: &email.subject,
            content: [Content {
                kind: "text/html",
                value: &email.html,
            }],
        }
    }
}
