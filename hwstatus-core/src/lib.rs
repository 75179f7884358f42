//! Homework Status Core
//!
//! Core types and pure logic for the homework status bot.
//!
//! This crate contains:
//! - Domain types: verdict table, polling watermark, homework feed
//! - Response validation and status interpretation
//! - Shape errors raised when the review API returns an unexpected payload
//!
//! Nothing in here performs I/O; the client and bot crates feed it decoded
//! JSON values.

pub mod domain;
pub mod error;

pub use domain::feed::{HomeworkFeed, check_response};
pub use domain::homework::parse_status;
pub use domain::verdict::VerdictTable;
pub use domain::watermark::Watermark;
pub use error::ShapeError;
