//! Application Layer (Use Cases)
//!
//! Orchestrates domain operations and coordinates between
//! repositories and external services.

mod enrollment_service;

pub use enrollment_service::{EnrollmentService, DROP_SUBJECT, ENROLLMENT_SUBJECT};
