//! Homework statuses repository
//!
//! Fetches raw homework status payloads from the review API.

use async_trait::async_trait;
use hwstatus_client::{ClientError, PracticumClient};
use serde_json::Value;

/// Repository trait for the review API
#[async_trait]
pub trait HomeworkRepository: Send + Sync {
    /// Fetches homework statuses updated at or after `from_date`
    ///
    /// Returns the decoded but unvalidated response body.
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError>;
}

/// HTTP implementation of HomeworkRepository
pub struct HttpHomeworkRepository {
    client: PracticumClient,
}

impl HttpHomeworkRepository {
    pub fn new(client: PracticumClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl HomeworkRepository for HttpHomeworkRepository {
    async fn fetch_statuses(&self, from_date: i64) -> Result<Value, ClientError> {
        self.client.homework_statuses(from_date).await
    }
}
