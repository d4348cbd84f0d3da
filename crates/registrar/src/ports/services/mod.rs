//! Service Ports
//!
//! Abstract interfaces for external services.

mod notification;

pub use notification::*;
