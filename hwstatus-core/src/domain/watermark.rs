//! Polling watermark
//!
//! The lower bound (`from_date`) of the next review API query, as a Unix
//! timestamp in seconds.

use chrono::{DateTime, NaiveDateTime, TimeDelta, Utc};
use serde_json::Value;
use std::fmt;

use crate::domain::homework::string_field;
use crate::error::{Result, ShapeError};

pub const DATE_UPDATED_FIELD: &str = "date_updated";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Watermark(i64);

impl Watermark {
    pub fn from_timestamp(timestamp: i64) -> Self {
        Self(timestamp)
    }

    /// Watermark `lookback` before `now`
    ///
    /// Returns `None` if the result falls outside the representable date
    /// range.
    pub fn lookback_from(now: DateTime<Utc>, lookback: TimeDelta) -> Option<Self> {
        now.checked_sub_signed(lookback)
            .map(|start| Self(start.timestamp()))
    }

    /// Reads `date_updated` from a homework record
    ///
    /// Accepts RFC 3339 timestamps and, for robustness, zone-less ISO-8601
    /// timestamps which are taken as UTC.
    pub fn from_record(homework: &Value) -> Result<Self> {
        let record = homework
            .as_object()
            .ok_or(ShapeError::NotAMapping("homework record"))?;
        let value = string_field(record, DATE_UPDATED_FIELD)?;
        Self::parse(value)
    }

    /// Parses an ISO-8601 UTC timestamp
    pub fn parse(value: &str) -> Result<Self> {
        if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
            return Ok(Self(parsed.timestamp()));
        }

        NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S")
            .map(|naive| Self(naive.and_utc().timestamp()))
            .map_err(|e| ShapeError::InvalidTimestamp {
                value: value.to_string(),
                reason: e.to_string(),
            })
    }

    /// Unix timestamp in seconds
    pub fn timestamp(&self) -> i64 {
        self.0
    }
}

impl fmt::Display for Watermark {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_utc_timestamp() {
        let watermark = Watermark::parse("2023-01-01T12:00:00Z").unwrap();
        assert_eq!(watermark.timestamp(), 1_672_574_400);
    }

    #[test]
    fn test_parse_zone_less_timestamp_as_utc() {
        let watermark = Watermark::parse("2023-01-01T12:00:00").unwrap();
        assert_eq!(watermark.timestamp(), 1_672_574_400);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        let err = Watermark::parse("yesterday").unwrap_err();
        assert!(matches!(err, ShapeError::InvalidTimestamp { .. }));
    }

    #[test]
    fn test_from_record_missing_date() {
        let err = Watermark::from_record(&json!({"homework_name": "hw"})).unwrap_err();
        assert_eq!(err, ShapeError::MissingField("date_updated"));
    }

    #[test]
    fn test_lookback_thirty_days() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let watermark = Watermark::lookback_from(now, TimeDelta::days(30)).unwrap();
        assert_eq!(watermark.timestamp(), 1_700_000_000 - 30 * 24 * 60 * 60);
    }

    #[test]
    fn test_lookback_out_of_range() {
        let now = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert!(Watermark::lookback_from(now, TimeDelta::days(200_000_000)).is_none());
    }
}
