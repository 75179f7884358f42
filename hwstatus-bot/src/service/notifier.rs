//! Notifier service
//!
//! Best-effort delivery: a failed send is logged and reported as `false`,
//! never as an error, so it cannot stop the polling loop.

use async_trait::async_trait;
use std::sync::Arc;
use tracing::{error, info};

use crate::repository::MessageRepository;

/// Service for delivering notifications
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends `text` and reports whether it was delivered
    async fn notify(&self, text: &str) -> bool;
}

/// Notifier backed by a message repository, without retries
pub struct StandardNotifier {
    messages: Arc<dyn MessageRepository>,
}

impl StandardNotifier {
    pub fn new(messages: Arc<dyn MessageRepository>) -> Self {
        Self { messages }
    }
}

#[async_trait]
impl Notifier for StandardNotifier {
    async fn notify(&self, text: &str) -> bool {
        match self.messages.send(text).await {
            Ok(()) => {
                info!("Message sent: {}", text);
                true
            }
            Err(e) => {
                error!("Failed to send message: {}", e);
                false
            }
        }
    }
}
