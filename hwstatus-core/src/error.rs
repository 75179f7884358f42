//! Error types for payload validation and interpretation

use thiserror::Error;

/// Result type alias for shape checks
pub type Result<T> = std::result::Result<T, ShapeError>;

/// The review API returned a payload that does not have the expected shape
///
/// The display text ends up inside outbound error notifications, so it is
/// written for a human reader.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// A value expected to be a JSON object was something else
    #[error("{0} is not a mapping")]
    NotAMapping(&'static str),

    /// The response object lacks a required top-level key
    #[error("response has no key `{0}`")]
    MissingKey(&'static str),

    /// A key is present but holds the wrong JSON type
    #[error("key `{key}` must be {expected}")]
    WrongShape {
        key: &'static str,
        expected: &'static str,
    },

    /// A homework record lacks a required field
    #[error("homework record has no field `{0}`")]
    MissingField(&'static str),

    /// The status code is absent from the verdict table
    #[error("unknown homework status `{0}`")]
    UnknownStatus(String),

    /// `date_updated` could not be parsed as an ISO-8601 UTC timestamp
    #[error("invalid timestamp `{value}`: {reason}")]
    InvalidTimestamp { value: String, reason: String },
}

impl ShapeError {
    /// Check if this error was caused by a missing key or field
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::MissingKey(_) | Self::MissingField(_))
    }
}
