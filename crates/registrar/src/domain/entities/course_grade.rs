//! CourseGrade - Graded course used for GPA calculation

use serde::{Deserialize, Serialize};

/// Lowest valid grade point
pub const MIN_GRADE_POINT: f64 = 0.0;
/// Highest valid grade point
pub const MAX_GRADE_POINT: f64 = 4.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseGrade {
    pub course_code: String,
    pub credits: u32,
    /// Validated when used, not when constructed
    pub grade_point: f64,
}

impl CourseGrade {
    pub fn new(course_code: impl Into<String>, credits: u32, grade_point: f64) -> Self {
        Self {
            course_code: course_code.into(),
            credits,
            grade_point,
        }
    }

    pub fn has_valid_grade_point(&self) -> bool {
        (MIN_GRADE_POINT..=MAX_GRADE_POINT).contains(&self.grade_point)
    }

    /// Credit-weighted grade points
    pub fn quality_points(&self) -> f64 {
        f64::from(self.credits) * self.grade_point
    }
}
