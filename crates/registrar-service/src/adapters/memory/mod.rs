//! In-Memory Repository Implementations
//!
//! Map-backed repositories for tests, demos and single-process deployments.
//! Writes are plain overwrites; there is no compare-and-swap.

mod course_repository;
mod student_repository;

pub use course_repository::InMemoryCourseRepository;
pub use student_repository::InMemoryStudentRepository;

use registrar::DomainError;

fn poisoned<T>(_: T) -> DomainError {
    DomainError::repository("In-memory store lock poisoned")
}
