//! In-memory implementation of CourseRepository

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use registrar::{Course, CourseRepository, DomainError, StudentRepository};

use super::poisoned;

/// In-memory implementation of CourseRepository
///
/// Prerequisites are answered from the student repository's completed
/// courses: every prerequisite code must appear among them.
pub struct InMemoryCourseRepository<S: StudentRepository> {
    courses: RwLock<HashMap<String, Course>>,
    students: Arc<S>,
}

impl<S: StudentRepository> InMemoryCourseRepository<S> {
    pub fn new(students: Arc<S>) -> Self {
        Self {
            courses: RwLock::new(HashMap::new()),
            students,
        }
    }

    /// Insert or replace a course
    pub fn insert(&self, course: Course) -> Result<(), DomainError> {
        self.courses
            .write()
            .map_err(poisoned)?
            .insert(course.code.clone(), course);
        Ok(())
    }
}

impl<S: StudentRepository> CourseRepository for InMemoryCourseRepository<S> {
    fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>, DomainError> {
        Ok(self
            .courses
            .read()
            .map_err(poisoned)?
            .get(course_code)
            .cloned())
    }

    fn update(&self, course: &Course) -> Result<(), DomainError> {
        self.insert(course.clone())
    }

    fn is_prerequisite_met(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> Result<bool, DomainError> {
        let course = self
            .find_by_course_code(course_code)?
            .ok_or_else(|| DomainError::course_not_found(course_code))?;

        if course.prerequisites.is_empty() {
            return Ok(true);
        }

        let completed = self.students.get_completed_courses(student_id)?;
        let missing: Vec<&str> = course
            .prerequisites
            .iter()
            .filter(|code| !completed.iter().any(|c| &c.code == *code))
            .map(String::as_str)
            .collect();

        if !missing.is_empty() {
            tracing::debug!(
                student_id,
                course_code,
                missing = ?missing,
                "Prerequisites outstanding"
            );
        }

        Ok(missing.is_empty())
    }
}
