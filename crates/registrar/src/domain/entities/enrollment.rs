//! Enrollment - Registration outcome

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Status written on every enrollment the workflow approves
pub const STATUS_APPROVED: &str = "APPROVED";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: Uuid,
    pub student_id: String,
    pub course_code: String,
    pub enrollment_date: DateTime<Utc>,
    pub status: String,
}

impl Enrollment {
    /// Create a new Enrollment with generated ID and timestamp
    pub fn new(
        student_id: impl Into<String>,
        course_code: impl Into<String>,
        status: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            student_id: student_id.into(),
            course_code: course_code.into(),
            enrollment_date: Utc::now(),
            status: status.into(),
        }
    }

    pub fn approved(student_id: impl Into<String>, course_code: impl Into<String>) -> Self {
        Self::new(student_id, course_code, STATUS_APPROVED)
    }

    pub fn is_approved(&self) -> bool {
        self.status == STATUS_APPROVED
    }
}
