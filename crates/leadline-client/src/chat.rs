//! Chat notifications through the Telegram Bot API.

use async_trait::async_trait;
use serde::Serialize;

use crate::client::{ensure_success, join_url};
use crate::Result;

const SERVICE: &str = "telegram";

/// Something that can post a message to the team's chat.
#[async_trait]
pub trait ChatNotifier: Send + Sync {
    /// Post one message. The text may use Telegram's HTML subset.
    async fn post(&self, text: &str) -> Result<()>;
}

/// Telegram-backed [`ChatNotifier`].
#[derive(Clone)]
pub struct TelegramClient {
    http: reqwest::Client,
    api_url: String,
    bot_token: String,
    chat_id: String,
}

impl TelegramClient {
    /// Create a client for one bot posting to one chat.
    pub fn new(
        http: reqwest::Client,
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        chat_id: impl Into<String>,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            bot_token: bot_token.into(),
            chat_id: chat_id.into(),
        }
    }

    fn send_message_url(&self) -> String {
        join_url(&self.api_url, &format!("bot{}/sendMessage", self.bot_token))
    }
}

#[derive(Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
    parse_mode: &'a str,
    disable_web_page_preview: bool,
}

#[async_trait]
impl ChatNotifier for TelegramClient {
    async fn post(&self, text: &str) -> Result<()> {
        tracing::debug!(chat_id = %self.chat_id, "posting chat message");
        let response = self
            .http
            .post(self.send_message_url())
            .json(&SendMessage {
                chat_id: &self.chat_id,
                text,
                parse_mode: "HTML",
                disable_web_page_preview: true,
            })
            .send()
            .await?;
        ensure_success(SERVICE, response).await
    }
}
