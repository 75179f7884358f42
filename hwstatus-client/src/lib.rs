//! Homework Status HTTP Clients
//!
//! Typed async clients for the two remote services the bot talks to:
//! - [`PracticumClient`]: the homework review API (polled for status changes)
//! - [`TelegramClient`]: the bot messaging API (used to deliver notifications)
//!
//! Both clients are thin: one request per call, no retries and no caching.
//! Retrying is the caller's job.
//!
//! # Example
//!
//! ```no_run
//! use hwstatus_client::PracticumClient;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let client = PracticumClient::new(
//!         "https://practicum.yandex.ru/api/user_api/homework_statuses/",
//!         "token",
//!     );
//!
//!     let response = client.homework_statuses(0).await?;
//!     println!("{response}");
//!     Ok(())
//! }
//! ```

pub mod error;
mod practicum;
mod telegram;

pub use error::{ClientError, Result};
pub use practicum::PracticumClient;
pub use telegram::TelegramClient;

use reqwest::StatusCode;
use serde::de::DeserializeOwned;

// =============================================================================
// Response Handlers
// =============================================================================

/// Check the status code and decode a JSON body
///
/// Anything but `200 OK` is reported as [`ClientError::UnexpectedStatus`]
/// carrying the response body; a body that is not valid JSON for `T` is
/// reported as [`ClientError::Decode`].
pub(crate) async fn handle_response<T: DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let status = response.status();

    if status != StatusCode::OK {
        let error_text = response
            .text()
            .await
            .unwrap_or_else(|_| "Unknown error".to_string());
        return Err(ClientError::unexpected_status(status.as_u16(), error_text));
    }

    let body = response
        .text()
        .await
        .map_err(|e| ClientError::Transport(e.without_url()))?;
    serde_json::from_str(&body)
        .map_err(|e| ClientError::Decode(format!("Failed to parse JSON response: {}", e)))
}
