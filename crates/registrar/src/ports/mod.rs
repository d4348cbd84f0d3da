//! Ports (Interfaces)
//!
//! Abstract interfaces that define how the domain layer
//! interacts with external systems (repositories, services).
//!
//! Implementations of these traits live in the adapter layer.
//! Every port is synchronous: callers block until the collaborator returns.

pub mod repositories;
pub mod services;

// Re-exports
pub use repositories::*;
pub use services::*;
