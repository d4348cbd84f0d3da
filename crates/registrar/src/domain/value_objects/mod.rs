//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod academic_status;

pub use academic_status::*;
