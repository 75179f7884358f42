//! Bot messaging API

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::handle_response;

/// HTTP client for the Telegram bot API
///
/// The bot token is part of every request URL, so transport errors are
/// stripped of their URL before being returned.
#[derive(Clone)]
pub struct TelegramClient {
    /// Base URL of the bot API (e.g., "https://api.telegram.org")
    api_url: String,
    bot_token: String,
    client: Client,
}

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct Reply {
    ok: bool,
    #[serde(default)]
    description: Option<String>,
}

impl TelegramClient {
    /// Create a new bot API client
    ///
    /// # Arguments
    /// * `api_url` - Base URL of the bot API
    /// * `bot_token` - Token issued to the bot
    pub fn new(api_url: impl Into<String>, bot_token: impl Into<String>) -> Self {
        Self::with_client(api_url, bot_token, Client::new())
    }

    /// Create a new bot API client with a custom HTTP client
    pub fn with_client(
        api_url: impl Into<String>,
        bot_token: impl Into<String>,
        client: Client,
    ) -> Self {
        let api_url = api_url.into();
        Self {
            api_url: api_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.into(),
            client,
        }
    }

    /// Get the base URL of the bot API
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Send a plain text message to a chat
    ///
    /// # Arguments
    /// * `chat_id` - Chat or channel identifier
    /// * `text` - Message body, sent without markup
    pub async fn send_message(&self, chat_id: &str, text: &str) -> Result<()> {
        let url = format!("{}/bot{}/sendMessage", self.api_url, self.bot_token);
        debug!("Sending message to chat {}", chat_id);

        let response = self
            .client
            .post(&url)
            .json(&SendMessage { chat_id, text })
            .send()
            .await
            .map_err(|e| ClientError::Transport(e.without_url()))?;

        let reply: Reply = handle_response(response).await?;
        if !reply.ok {
            return Err(ClientError::Rejected(
                reply
                    .description
                    .unwrap_or_else(|| "no description".to_string()),
            ));
        }

        Ok(())
    }
}

impl fmt::Debug for TelegramClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramClient")
            .field("api_url", &self.api_url)
            .field("bot_token", &"<redacted>")
            .finish()
    }
}
