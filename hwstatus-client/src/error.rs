//! Error types for the homework status clients

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur when talking to the review or messaging API
#[derive(Debug, Error)]
pub enum ClientError {
    /// Connection, timeout or other transport failure
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a status other than 200
    #[error("unexpected API status {status}: {message}")]
    UnexpectedStatus {
        /// HTTP status code
        status: u16,
        /// Response body, if any
        message: String,
    },

    /// The response body is not the JSON we expected
    #[error("failed to decode response: {0}")]
    Decode(String),

    /// The messaging API accepted the request but refused to deliver
    #[error("message rejected: {0}")]
    Rejected(String),
}

impl ClientError {
    /// Create an unexpected status error from status code and body
    pub fn unexpected_status(status: u16, message: impl Into<String>) -> Self {
        Self::UnexpectedStatus {
            status,
            message: message.into(),
        }
    }

    /// Check if this error is a client error (4xx status)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if (400..500).contains(status))
    }

    /// Check if this error is a server error (5xx status)
    pub fn is_server_error(&self) -> bool {
        matches!(self, Self::UnexpectedStatus { status, .. } if *status >= 500)
    }

    /// Check if the request never got an HTTP answer
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }
}
