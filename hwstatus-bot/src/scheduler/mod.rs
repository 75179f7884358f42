//! Scheduler layer for the bot
//!
//! This layer drives the poll, detect and notify cycle and owns all state
//! carried between iterations.

pub mod poller;

pub use poller::StatusPoller;
