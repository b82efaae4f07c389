//! Fan-out of a request to the outbound integrations.
//!
//! Every call for one request starts at once and all of them are awaited
//! before the handler responds. Each call's outcome is captured as a
//! [`Delivery`]; failures are logged by [`report`] and never change the
//! response.

use std::fmt;
use std::future::Future;

use leadline_client::{ChatNotifier, EmailSender, LeadSink, OutboundEmail};
use leadline_core::{ContactLead, EventLead, Inquiry, LeadRecord, TrackingEvent};

use crate::state::AppState;
use crate::templates::{confirmation_subject, notification_subject};
use crate::Result;

/// One kind of outbound call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Channel {
    /// Thank-you email to the submitter.
    ConfirmationEmail,
    /// Lead summary email to the business.
    NotificationEmail,
    /// Lead summary posted to chat.
    Chat,
    /// Lead record posted to the CRM.
    Crm,
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::ConfirmationEmail => "confirmation_email",
            Self::NotificationEmail => "notification_email",
            Self::Chat => "chat",
            Self::Crm => "crm",
        })
    }
}

/// Outcome of one outbound call.
#[derive(Debug)]
pub struct Delivery {
    /// What was attempted.
    pub channel: Channel,
    /// How it went.
    pub result: Result<()>,
}

impl Delivery {
    fn new(channel: Channel, result: Result<()>) -> Self {
        Self { channel, result }
    }

    /// Whether the call succeeded.
    pub fn is_ok(&self) -> bool {
        self.result.is_ok()
    }
}

/// Send every notification and CRM post an accepted inquiry calls for.
pub async fn relay_inquiry(state: &AppState, inquiry: &Inquiry) -> Vec<Delivery> {
    let outbound = &state.outbound;

    let confirmation = attempt(
        Channel::ConfirmationEmail,
        outbound
            .email
            .as_ref()
            .zip(inquiry.email.as_deref())
            .map(|(sender, to)| send_confirmation(state, sender.as_ref(), inquiry, to)),
    );
    let notification = attempt(
        Channel::NotificationEmail,
        outbound
            .email
            .as_ref()
            .map(|sender| send_notification(state, sender.as_ref(), inquiry)),
    );
    let chat = attempt(
        Channel::Chat,
        outbound
            .chat
            .as_ref()
            .map(|notifier| post_chat(state, notifier.as_ref(), inquiry)),
    );
    let lead: LeadRecord = ContactLead::from_inquiry(inquiry, &state.config.site.name).into();
    let crm = attempt(
        Channel::Crm,
        outbound.crm.as_ref().map(|sink| submit_lead(sink.as_ref(), &lead)),
    );

    let (confirmation, notification, chat, crm) =
        tokio::join!(confirmation, notification, chat, crm);
    [confirmation, notification, chat, crm]
        .into_iter()
        .flatten()
        .collect()
}

/// Forward a tracking event to the CRM, if one is configured.
pub async fn relay_event(state: &AppState, event: &TrackingEvent) -> Vec<Delivery> {
    let lead: LeadRecord = EventLead::phone_click(event, &state.config.site.name).into();
    let crm = attempt(
        Channel::Crm,
        state
            .outbound
            .crm
            .as_ref()
            .map(|sink| submit_lead(sink.as_ref(), &lead)),
    );
    crm.await.into_iter().collect()
}

/// Run `call` if there is one and record its outcome.
async fn attempt<F>(channel: Channel, call: Option<F>) -> Option<Delivery>
where
    F: Future<Output = Result<()>>,
{
    Some(Delivery::new(channel, call?.await))
}

async fn send_confirmation(
    state: &AppState,
    sender: &dyn EmailSender,
    inquiry: &Inquiry,
    to: &str,
) -> Result<()> {
    let site = &state.config.site;
    let email = OutboundEmail {
        to: to.to_string(),
        from: state.config.email.from.clone(),
        reply_to: None,
        subject: confirmation_subject(site),
        html: state.templates.confirmation_email(site, inquiry)?,
    };
    Ok(sender.send(&email).await?)
}

async fn send_notification(
    state: &AppState,
    sender: &dyn EmailSender,
    inquiry: &Inquiry,
) -> Result<()> {
    let site = &state.config.site;
    let email = OutboundEmail {
        to: site.email.clone(),
        from: state.config.email.from.clone(),
        reply_to: inquiry.email.clone(),
        subject: notification_subject(inquiry),
        html: state.templates.notification_email(site, inquiry)?,
    };
    Ok(sender.send(&email).await?)
}

async fn post_chat(
    state: &AppState,
    notifier: &dyn ChatNotifier,
    inquiry: &Inquiry,
) -> Result<()> {
    let text = state.templates.chat_message(&state.config.site, inquiry)?;
    Ok(notifier.post(&text).await?)
}

async fn submit_lead(sink: &dyn LeadSink, lead: &LeadRecord) -> Result<()> {
    Ok(sink.submit(lead).await?)
}

/// Log the outcome of each delivery.
pub fn report(deliveries: &[Delivery]) {
    for delivery in deliveries {
        match &delivery.result {
            Ok(()) => tracing::debug!(channel = %delivery.channel, "delivered"),
            Err(e) => tracing::warn!(channel = %delivery.channel, error = %e, "delivery failed"),
        }
    }
    let failed = deliveries.iter().filter(|d| !d.is_ok()).count();
    tracing::info!(
        attempted = deliveries.len(),
        failed,
        "outbound calls settled"
    );
}
