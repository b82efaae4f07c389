//! Lead records posted to the CRM ingestion endpoint.
//!
//! The CRM accepts two shapes on the same endpoint: full contact leads and
//! lightweight event leads (tracked clicks). [`LeadRecord`] serializes to
//! whichever one it holds, without a tag.

use serde::Serialize;

use crate::submission::{Inquiry, TrackingEvent};

/// Source tag for leads that came through the contact form.
pub const CONTACT_SOURCE: &str = "website";
/// Form identifier for contact leads.
pub const CONTACT_FORM: &str = "contact";
/// Form name for tracked phone clicks.
pub const PHONE_CLICK_FORM: &str = "phone_click";

const UNKNOWN: &str = "unknown";

/// Extra context attached to a contact lead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LeadMetadata {
    /// Form the lead came from.
    pub form: String,
    /// Site display name.
    pub site: String,
}

/// A contact-form lead.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactLead {
    /// Submitter name.
    pub name: String,
    /// Submitter email, `null` when absent.
    pub email: Option<String>,
    /// Submitter phone, `null` when absent.
    pub phone: Option<String>,
    /// City, `null` when absent.
    pub city: Option<String>,
    /// Requested service, `null` when absent.
    pub service: Option<String>,
    /// Free-form message.
    pub message: String,
    /// Channel tag.
    pub source: String,
    /// Form and site context.
    pub metadata: LeadMetadata,
}

impl ContactLead {
    /// Build a contact lead for a validated inquiry.
    pub fn from_inquiry(inquiry: &Inquiry, site_name: &str) -> Self {
        Self {
            name: inquiry.name.clone(),
            email: inquiry.email.clone(),
            phone: inquiry.phone.clone(),
            city: inquiry.city.clone(),
            service: inquiry.service.clone(),
            message: inquiry.message.clone(),
            source: CONTACT_SOURCE.to_string(),
            metadata: LeadMetadata {
                form: CONTACT_FORM.to_string(),
                site: site_name.to_string(),
            },
        }
    }
}

/// A synthetic lead standing in for a tracked event.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLead {
    /// Placeholder first name.
    pub first_name: String,
    /// Placeholder last name.
    pub last_name: String,
    /// Phone number that was clicked.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Event category as the CRM files it.
    pub form_name: String,
    /// Site display name.
    pub source_site: String,
    /// Page the event happened on.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Human-readable summary.
    pub message: String,
}

impl EventLead {
    /// Build the lead for a phone-number click.
    pub fn phone_click(event: &TrackingEvent, site_name: &str) -> Self {
        let phone = event.phone.as_deref().unwrap_or(UNKNOWN);
        let page = event.page.as_deref().unwrap_or(UNKNOWN);
        let at = event.timestamp.as_deref().unwrap_or(UNKNOWN);

        Self {
            first_name: "Phone".to_string(),
            last_name: "Click".to_string(),
            phone: event.phone.clone(),
            form_name: PHONE_CLICK_FORM.to_string(),
            source_site: site_name.to_string(),
            source_url: event.page.clone(),
            message: format!("Phone number {phone} clicked on {page} at {at}"),
        }
    }
}

/// Anything the CRM ingestion endpoint accepts.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum LeadRecord {
    /// A contact-form lead.
    Contact(ContactLead),
    /// A tracked event.
    Event(EventLead),
}

impl LeadRecord {
    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Contact(_) => CONTACT_FORM,
            Self::Event(_) => PHONE_CLICK_FORM,
        }
    }
}

impl From<ContactLead> for LeadRecord {
    fn from(lead: ContactLead) -> Self {
        Self::Contact(lead)
    }
}

impl From<EventLead> for LeadRecord {
    fn from(lead: EventLead) -> Self {
        Self::Event(lead)
    }
}
