//! In-memory implementation of StudentRepository

use std::collections::HashMap;
use std::sync::RwLock;

use registrar::{Course, DomainError, Student, StudentRepository};

use super::poisoned;

/// In-memory implementation of StudentRepository
#[derive(Default)]
pub struct InMemoryStudentRepository {
    students: RwLock<HashMap<String, Student>>,
    /// Completed courses per student id, in completion order
    completed: RwLock<HashMap<String, Vec<Course>>>,
}

impl InMemoryStudentRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a student
    pub fn insert(&self, student: Student) -> Result<(), DomainError> {
        self.students
            .write()
            .map_err(poisoned)?
            .insert(student.id.clone(), student);
        Ok(())
    }

    /// Record that a student completed a course
    pub fn record_completion(&self, student_id: &str, course: Course) -> Result<(), DomainError> {
        let mut completed = self.completed.write().map_err(poisoned)?;
        let courses = completed.entry(student_id.to_string()).or_default();
        if !courses.iter().any(|c| c.code == course.code) {
            courses.push(course);
        }
        Ok(())
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn find_by_id(&self, student_id: &str) -> Result<Option<Student>, DomainError> {
        Ok(self
            .students
            .read()
            .map_err(poisoned)?
            .get(student_id)
            .cloned())
    }

    fn update(&self, student: &Student) -> Result<(), DomainError> {
        self.insert(student.clone())
    }

    fn get_completed_courses(&self, student_id: &str) -> Result<Vec<Course>, DomainError> {
        Ok(self
            .completed
            .read()
            .map_err(poisoned)?
            .get(student_id)
            .cloned()
            .unwrap_or_default())
    }
}
