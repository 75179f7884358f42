//! Service layer
//!
//! Services hold the business rules that sit on top of repositories.

mod notifier;

pub use notifier::Notifier;
pub use notifier::StandardNotifier;
