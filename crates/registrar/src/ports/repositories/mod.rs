//! Repository Ports
//!
//! Abstract interfaces for data persistence operations.

mod course_repository;
mod student_repository;

pub use course_repository::*;
pub use student_repository::*;
