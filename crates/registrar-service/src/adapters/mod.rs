//! Infrastructure Adapters
//!
//! Implementations of domain ports for external systems.

pub mod memory;
pub mod notification;

// Re-exports
pub use memory::{InMemoryCourseRepository, InMemoryStudentRepository};
pub use notification::{Channel, OutboxNotifier, SentNotification};
