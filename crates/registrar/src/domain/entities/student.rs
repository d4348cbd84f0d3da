//! Student - Registration subject

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::AcademicStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub email: String,
    pub major: String,
    /// 1-based
    pub semester: u32,
    /// 0.0 - 4.0 inclusive
    pub gpa: f64,
    #[serde(default)]
    pub academic_status: AcademicStatus,
}

impl Student {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        email: impl Into<String>,
        major: impl Into<String>,
        semester: u32,
        gpa: f64,
        academic_status: AcademicStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            major: major.into(),
            semester,
            gpa,
            academic_status,
        }
    }

    pub fn is_suspended(&self) -> bool {
        !self.academic_status.can_enroll()
    }
}
