//! Shared handler state.

use std::sync::Arc;

use leadline_client::{
    http_client, ChatNotifier, EmailSender, LeadSink, SendGridClient, SuperToolClient,
    TelegramClient,
};
use leadline_core::Config;

use crate::templates::Templates;
use crate::Result;

/// The outbound integrations a request may use.
///
/// A `None` slot means the integration is not configured and is skipped.
#[derive(Clone, Default)]
pub struct Outbound {
    /// Email delivery.
    pub email: Option<Arc<dyn EmailSender>>,
    /// Chat notifications.
    pub chat: Option<Arc<dyn ChatNotifier>>,
    /// CRM lead ingestion.
    pub crm: Option<Arc<dyn LeadSink>>,
}

impl Outbound {
    /// Build the real integrations enabled by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let http = http_client()?;
        let mut outbound = Self::default();

        if config.email_enabled()
            && let Some(api_key) = &config.email.api_key
        {
            outbound.email = Some(Arc::new(SendGridClient::new(
                http.clone(),
                api_key.clone(),
                config.email.api_url.clone(),
            )));
        }

        if config.chat_enabled()
            && let Some(token) = &config.chat.bot_token
        {
            outbound.chat = Some(Arc::new(TelegramClient::new(
                http.clone(),
                config.chat.api_url.clone(),
                token.clone(),
                config.chat.chat_id.clone(),
            )));
        }

        if let Some(tenant) = &config.crm.tenant_id {
            outbound.crm = Some(Arc::new(SuperToolClient::new(
                http,
                config.crm.base_url.clone(),
                tenant.clone(),
            )));
        }

        Ok(outbound)
    }
}

/// State handed to every handler. Cheap to clone.
#[derive(Clone)]
pub struct AppState {
    /// Immutable process configuration.
    pub config: Arc<Config>,
    /// Compiled templates.
    pub templates: Arc<Templates>,
    /// Outbound integrations.
    pub outbound: Outbound,
}

impl AppState {
    /// Assemble state from configuration and explicit integrations.
    pub fn new(config: Config, outbound: Outbound) -> Result<Self> {
        Ok(Self {
            config: Arc::new(config),
            templates: Arc::new(Templates::new()?),
            outbound,
        })
    }

    /// Assemble state with the real integrations `config` enables.
    pub fn from_config(config: Config) -> Result<Self> {
        let outbound = Outbound::from_config(&config)?;
        tracing::info!(
            email = outbound.email.is_some(),
            chat = outbound.chat.is_some(),
            crm = outbound.crm.is_some(),
            "outbound integrations configured"
        );
        Self::new(config, outbound)
    }
}
