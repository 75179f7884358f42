//! Repository layer
//!
//! Repositories are thin wrappers that put a trait in front of the two HTTP
//! clients. They carry no business logic; the scheduler depends only on the
//! traits so it can be driven by in-memory implementations in tests.

mod homeworks;
mod messages;

// Re-export traits
pub use homeworks::HomeworkRepository;
pub use messages::MessageRepository;

// Re-export implementations
pub use homeworks::HttpHomeworkRepository;
pub use messages::TelegramMessageRepository;
