//! Course - Offering with bounded occupancy

use serde::{Deserialize, Serialize};

/// Course offering.
///
/// `enrolled_count` never exceeds `capacity` after a registration workflow;
/// the bound is checked at enroll time, not by this type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub code: String,
    pub name: String,
    pub credits: u32,
    pub capacity: u32,
    pub enrolled_count: u32,
    pub lecturer: String,
    /// Course codes, in declaration order
    #[serde(default)]
    pub prerequisites: Vec<String>,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: u32,
        capacity: u32,
        enrolled_count: u32,
        lecturer: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            capacity,
            enrolled_count,
            lecturer: lecturer.into(),
            prerequisites: Vec::new(),
        }
    }

    /// Set prerequisite course codes
    pub fn with_prerequisites<I, S>(mut self, prerequisites: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.prerequisites = prerequisites.into_iter().map(Into::into).collect();
        self
    }

    pub fn has_capacity(&self) -> bool {
        self.enrolled_count < self.capacity
    }

    pub fn remaining_seats(&self) -> u32 {
        self.capacity.saturating_sub(self.enrolled_count)
    }

    /// Snapshot of this course with a different occupancy.
    pub fn with_enrolled_count(&self, enrolled_count: u32) -> Self {
        Self {
            enrolled_count,
            ..self.clone()
        }
    }
}
