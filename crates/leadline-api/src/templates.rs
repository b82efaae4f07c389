//! HTML rendering for confirmation pages, emails, and chat messages.
//!
//! All templates are compiled into the binary and registered with `.html`
//! names so Tera autoescapes every interpolated value. Submitted fields are
//! untrusted and end up in browsers, inboxes, and chat clients.

use leadline_core::config::SiteConfig;
use leadline_core::Inquiry;
use serde::Serialize;
use tera::{Context, Tera};

use crate::Result;

const SUCCESS_PAGE: &str = "success_page.html";
const CONFIRMATION_EMAIL: &str = "confirmation_email.html";
const NOTIFICATION_EMAIL: &str = "notification_email.html";
const LEAD_CHAT: &str = "lead_chat.html";

const GENERAL_INQUIRY: &str = "General inquiry";
const NOT_SPECIFIED: &str = "Not specified";
const NOT_PROVIDED: &str = "Not provided";

/// Compiled template set.
pub struct Templates {
    tera: Tera,
}

impl Templates {
    /// Compile the built-in templates.
    pub fn new() -> Result<Self> {
        let mut tera = Tera::default();
        tera.add_raw_templates(vec![
            (SUCCESS_PAGE, include_str!("../templates/success_page.html")),
            (
                CONFIRMATION_EMAIL,
                include_str!("../templates/confirmation_email.html"),
            ),
            (
                NOTIFICATION_EMAIL,
                include_str!("../templates/notification_email.html"),
            ),
            (LEAD_CHAT, include_str!("../templates/lead_chat.html")),
        ])?;
        Ok(Self { tera })
    }

    /// The "message sent" page shown to browsers after a form post.
    ///
    /// Rendered the same way whether or not the submission was accepted.
    pub fn success_page(&self, site: &SiteConfig, name: Option<&str>) -> Result<String> {
        let mut context = site_context(site);
        context.insert("name", name.unwrap_or_default());
        Ok(self.tera.render(SUCCESS_PAGE, &context)?)
    }

    /// Email thanking the submitter and restating their request.
    pub fn confirmation_email(&self, site: &SiteConfig, inquiry: &Inquiry) -> Result<String> {
        self.render_lead(CONFIRMATION_EMAIL, site, inquiry)
    }

    /// Email telling the business about a new lead.
    pub fn notification_email(&self, site: &SiteConfig, inquiry: &Inquiry) -> Result<String> {
        self.render_lead(NOTIFICATION_EMAIL, site, inquiry)
    }

    /// Chat message (Telegram HTML subset) announcing a new lead.
    pub fn chat_message(&self, site: &SiteConfig, inquiry: &Inquiry) -> Result<String> {
        Ok(self
            .render_lead(LEAD_CHAT, site, inquiry)?
            .trim()
            .to_string())
    }

    fn render_lead(&self, template: &str, site: &SiteConfig, inquiry: &Inquiry) -> Result<String> {
        let mut context = site_context(site);
        context.insert("lead", &LeadView::from(inquiry));
        Ok(self.tera.render(template, &context)?)
    }
}

/// Subject line for the submitter's confirmation email.
pub fn confirmation_subject(site: &SiteConfig) -> String {
    format!("Thanks for contacting {}!", site.name)
}

/// Subject line for the business notification email.
pub fn notification_subject(inquiry: &Inquiry) -> String {
    format!(
        "🔔 New Lead: {} - {}",
        inquiry.name,
        inquiry.service.as_deref().unwrap_or(GENERAL_INQUIRY)
    )
}

fn site_context(site: &SiteConfig) -> Context {
    let mut context = Context::new();
    context.insert("site_name", &site.name);
    context.insert("site_phone", &site.phone);
    context.insert("site_tagline", &site.tagline);
    context
}

/// Inquiry fields with display fallbacks applied.
#[derive(Serialize)]
struct LeadView<'a> {
    name: &'a str,
    email: &'a str,
    phone: &'a str,
    city: &'a str,
    service: &'a str,
    message: &'a str,
}

impl<'a> From<&'a Inquiry> for LeadView<'a> {
    fn from(inquiry: &'a Inquiry) -> Self {
        Self {
            name: &inquiry.name,
            email: inquiry.email.as_deref().unwrap_or(NOT_PROVIDED),
            phone: inquiry.phone.as_deref().unwrap_or(NOT_PROVIDED),
            city: inquiry.city.as_deref().unwrap_or(NOT_SPECIFIED),
            service: inquiry.service.as_deref().unwrap_or(GENERAL_INQUIRY),
            message: &inquiry.message,
        }
    }
}
