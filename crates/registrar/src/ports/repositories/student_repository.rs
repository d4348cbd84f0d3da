//! Student Repository Port
//!
//! Abstract interface for Student persistence operations.

use crate::domain::{errors::DomainError, Course, Student};

/// Repository interface for Student entities
pub trait StudentRepository: Send + Sync {
    /// Find a Student by ID
    fn find_by_id(&self, student_id: &str) -> Result<Option<Student>, DomainError>;

    /// Write back a Student (keyed by `student.id`)
    fn update(&self, student: &Student) -> Result<(), DomainError>;

    /// Courses the student has completed
    fn get_completed_courses(&self, student_id: &str) -> Result<Vec<Course>, DomainError>;
}
