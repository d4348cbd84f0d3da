//! Domain Entities
//!
//! Plain records without infrastructure dependencies.
//! - Student: enrolled person with GPA and standing
//! - Course: offering with capacity and prerequisites
//! - Enrollment: outcome of a successful registration
//! - CourseGrade: graded course, input to GPA calculation

mod course;
mod course_grade;
mod enrollment;
mod student;

pub use course::*;
pub use course_grade::*;
pub use enrollment::*;
pub use student::*;
