//! Course Repository Port
//!
//! Abstract interface for Course persistence operations.

use crate::domain::{errors::DomainError, Course};

/// Repository interface for Course entities
///
/// `update` is a plain overwrite. Implementations that serve concurrent
/// callers must provide their own compare-and-swap if the capacity bound
/// has to hold across racing enrollments.
pub trait CourseRepository: Send + Sync {
    /// Find a Course by its code
    fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>, DomainError>;

    /// Write back a Course (keyed by `course.code`)
    fn update(&self, course: &Course) -> Result<(), DomainError>;

    /// Whether the student has satisfied every prerequisite of the course
    fn is_prerequisite_met(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> Result<bool, DomainError>;
}
