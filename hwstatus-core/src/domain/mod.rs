//! Core domain types
//!
//! Homework records are not owned by this system: they arrive verbatim from
//! the review API on every call and are inspected as raw JSON values.

pub mod feed;
pub mod homework;
pub mod verdict;
pub mod watermark;
