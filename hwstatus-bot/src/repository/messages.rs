//! Messages repository
//!
//! Delivers plain text messages to the single configured chat.

use async_trait::async_trait;
use hwstatus_client::{ClientError, TelegramClient};

/// Repository trait for outbound messages
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Sends `text` to the configured destination
    async fn send(&self, text: &str) -> Result<(), ClientError>;
}

/// Telegram implementation of MessageRepository
pub struct TelegramMessageRepository {
    client: TelegramClient,
    chat_id: String,
}

impl TelegramMessageRepository {
    /// Creates a repository bound to one chat
    ///
    /// # Arguments
    /// * `client` - Bot API client
    /// * `chat_id` - Chat or channel that receives every message
    pub fn new(client: TelegramClient, chat_id: String) -> Self {
        Self { client, chat_id }
    }
}

#[async_trait]
impl MessageRepository for TelegramMessageRepository {
    async fn send(&self, text: &str) -> Result<(), ClientError> {
        self.client.send_message(&self.chat_id, text).await
    }
}
