//! Response validation
//!
//! Checks that a decoded review API response is an object with a
//! `homeworks` array and turns it into a [`HomeworkFeed`].

use serde_json::Value;

use crate::error::{Result, ShapeError};

/// Key holding the homework list in the review API response
pub const HOMEWORKS_KEY: &str = "homeworks";

/// Homework activity found in one query window
///
/// An empty window is valid and distinct from a failure: it means nothing
/// changed since the watermark.
#[derive(Debug, Clone, PartialEq)]
pub enum HomeworkFeed {
    /// At least one record, most recent first
    Records(Vec<Value>),
    /// No homework activity in the window
    Empty,
}

impl HomeworkFeed {
    /// The most recent homework record, if any
    pub fn latest(&self) -> Option<&Value> {
        match self {
            Self::Records(records) => records.first(),
            Self::Empty => None,
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Records(records) => records.len(),
            Self::Empty => 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// Validates a decoded response and extracts its homework list
///
/// Fails with [`ShapeError::NotAMapping`] if the response is not an object,
/// [`ShapeError::MissingKey`] if `homeworks` is absent, and
/// [`ShapeError::WrongShape`] if `homeworks` is not an array.
pub fn check_response(response: Value) -> Result<HomeworkFeed> {
    let Value::Object(mut body) = response else {
        return Err(ShapeError::NotAMapping("response"));
    };

    match body.remove(HOMEWORKS_KEY) {
        None => Err(ShapeError::MissingKey(HOMEWORKS_KEY)),
        Some(Value::Array(records)) if records.is_empty() => Ok(HomeworkFeed::Empty),
        Some(Value::Array(records)) => Ok(HomeworkFeed::Records(records)),
        Some(_) => Err(ShapeError::WrongShape {
            key: HOMEWORKS_KEY,
            expected: "a list",
        }),
    }
}
