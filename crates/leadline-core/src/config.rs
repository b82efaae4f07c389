//! Process-wide configuration.
//!
//! [`Config`] is plain data: it is assembled once at startup (the CLI fills
//! it from flags and environment variables) and handed to the server, which
//! never mutates it. Secrets are redacted from `Debug` output and from
//! [`Config::to_env_vars`].

use std::fmt;
use std::str::FromStr;

use crate::{Error, Result};

/// Default CRM base URL.
pub const DEFAULT_CRM_URL: &str = "https://backend-production-5ad2.up.railway.app";
/// Default SendGrid send endpoint.
pub const DEFAULT_SENDGRID_URL: &str = "https://api.sendgrid.com/v3/mail/send";
/// Default Telegram Bot API base.
pub const DEFAULT_TELEGRAM_URL: &str = "https://api.telegram.org";
/// Default chat channel for lead notifications.
pub const DEFAULT_CHAT_ID: &str = "@gullstack_leads";
/// Default site display name.
pub const DEFAULT_SITE_NAME: &str = "Osborne Electric";
/// Default business recipient address.
pub const DEFAULT_SITE_EMAIL: &str = "info@osborne-electric.com";
/// Default sender address.
pub const DEFAULT_FROM_EMAIL: &str = "leads@gullstack.com";
/// Default callback number quoted in confirmation emails.
pub const DEFAULT_SITE_PHONE: &str = "(801) 885-4521";
/// Default footer line for outgoing emails.
pub const DEFAULT_SITE_TAGLINE: &str = "Licensed Master Electricians Serving Utah";

const REDACTED: &str = "***";

// ============================================================================
// NotifyBackend
// ============================================================================

/// Which notification channels the contact handler fires.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotifyBackend {
    /// Confirmation + notification emails.
    #[default]
    Email,
    /// A single chat message per lead.
    Chat,
    /// Emails and chat message.
    Both,
}

impl NotifyBackend {
    /// Whether email delivery is part of this backend.
    pub fn uses_email(self) -> bool {
        matches!(self, Self::Email | Self::Both)
    }

    /// Whether chat delivery is part of this backend.
    pub fn uses_chat(self) -> bool {
        matches!(self, Self::Chat | Self::Both)
    }

    /// Stable lowercase name, as accepted by [`FromStr`].
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Chat => "chat",
            Self::Both => "both",
        }
    }
}

impl fmt::Display for NotifyBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for NotifyBackend {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "chat" => Ok(Self::Chat),
            "both" => Ok(Self::Both),
            other => Err(Error::config(format!(
                "unknown notify backend '{other}' (expected email, chat, or both)"
            ))),
        }
    }
}

// ============================================================================
// Config sections
// ============================================================================

/// Public-facing details of the site the forms live on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Display name used in page titles, subjects, and CRM source tags.
    pub name: String,
    /// Business inbox that receives lead notifications.
    pub email: String,
    /// Callback number quoted to submitters.
    pub phone: String,
    /// Footer line for outgoing emails.
    pub tagline: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SITE_NAME.to_string(),
            email: DEFAULT_SITE_EMAIL.to_string(),
            phone: DEFAULT_SITE_PHONE.to_string(),
            tagline: DEFAULT_SITE_TAGLINE.to_string(),
        }
    }
}

/// Email delivery provider settings.
#[derive(Clone, PartialEq, Eq)]
pub struct EmailConfig {
    /// Provider API key. Email is disabled without one.
    pub api_key: Option<String>,
    /// Send endpoint.
    pub api_url: String,
    /// Sender address.
    pub from: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_SENDGRID_URL.to_string(),
            from: DEFAULT_FROM_EMAIL.to_string(),
        }
    }
}

impl fmt::Debug for EmailConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmailConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| REDACTED))
            .field("api_url", &self.api_url)
            .field("from", &self.from)
            .finish()
    }
}

/// Chat notification provider settings.
#[derive(Clone, PartialEq, Eq)]
pub struct ChatConfig {
    /// Bot token. Chat is disabled without one.
    pub bot_token: Option<String>,
    /// Destination chat or channel.
    pub chat_id: String,
    /// Bot API base URL.
    pub api_url: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            bot_token: None,
            chat_id: DEFAULT_CHAT_ID.to_string(),
            api_url: DEFAULT_TELEGRAM_URL.to_string(),
        }
    }
}

impl fmt::Debug for ChatConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChatConfig")
            .field("bot_token", &self.bot_token.as_ref().map(|_| REDACTED))
            .field("chat_id", &self.chat_id)
            .field("api_url", &self.api_url)
            .finish()
    }
}

/// CRM lead-ingestion settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CrmConfig {
    /// Base URL of the CRM API.
    pub base_url: String,
    /// Tenant the leads are filed under. CRM posts are disabled without one.
    pub tenant_id: Option<String>,
}

impl Default for CrmConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_CRM_URL.to_string(),
            tenant_id: None,
        }
    }
}

// ============================================================================
// Config
// ============================================================================

/// Immutable configuration shared by every handler.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Config {
    /// Site details.
    pub site: SiteConfig,
    /// Email provider.
    pub email: EmailConfig,
    /// Chat provider.
    pub chat: ChatConfig,
    /// CRM ingestion.
    pub crm: CrmConfig,
    /// Which notification channels to use.
    pub notify: NotifyBackend,
}

impl Config {
    /// Whether the contact handler sends emails.
    pub fn email_enabled(&self) -> bool {
        self.notify.uses_email() && self.email.api_key.is_some()
    }

    /// Whether the contact handler posts chat messages.
    pub fn chat_enabled(&self) -> bool {
        self.notify.uses_chat() && self.chat.bot_token.is_some()
    }

    /// Whether submissions and events are forwarded to the CRM.
    pub fn crm_enabled(&self) -> bool {
        self.crm.tenant_id.is_some()
    }

    /// Render the configuration as environment variable pairs.
    ///
    /// Secrets are replaced with `***`; unset optional values are skipped.
    pub fn to_env_vars(&self) -> Vec<(&'static str, String)> {
        let mut vars = vec![
            ("NOTIFY_BACKEND", self.notify.to_string()),
            ("SITE_NAME", self.site.name.clone()),
            ("SITE_EMAIL", self.site.email.clone()),
            ("SITE_PHONE", self.site.phone.clone()),
            ("SITE_TAGLINE", self.site.tagline.clone()),
            ("FROM_EMAIL", self.email.from.clone()),
            ("SENDGRID_API_URL", self.email.api_url.clone()),
        ];
        if self.email.api_key.is_some() {
            vars.push(("SENDGRID_API_KEY", REDACTED.to_string()));
        }
        vars.push(("TELEGRAM_API_URL", self.chat.api_url.clone()));
        vars.push(("TELEGRAM_CHAT_ID", self.chat.chat_id.clone()));
        if self.chat.bot_token.is_some() {
            vars.push(("TELEGRAM_BOT_TOKEN", REDACTED.to_string()));
        }
        vars.push(("SUPERTOOL_API", self.crm.base_url.clone()));
        if let Some(tenant) = &self.crm.tenant_id {
            vars.push(("SUPERTOOL_TENANT_ID", tenant.clone()));
        }
        vars
    }
}

/// Treat a blank value as unset.
///
/// Environment variables exported as empty strings disable a feature the
/// same way an absent variable does.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
