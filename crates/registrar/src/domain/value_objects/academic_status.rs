//! AcademicStatus - Standing category derived from GPA and semester

use serde::{Deserialize, Serialize};

/// A student's academic standing
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AcademicStatus {
    #[default]
    Active,
    Probation,
    /// Suspended students cannot enroll
    Suspended,
}

impl AcademicStatus {
    pub fn can_enroll(&self) -> bool {
        !matches!(self, AcademicStatus::Suspended)
    }
}

impl std::fmt::Display for AcademicStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AcademicStatus::Active => write!(f, "ACTIVE"),
            AcademicStatus::Probation => write!(f, "PROBATION"),
            AcademicStatus::Suspended => write!(f, "SUSPENDED"),
        }
    }
}

impl std::str::FromStr for AcademicStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "ACTIVE" => Ok(AcademicStatus::Active),
            "PROBATION" => Ok(AcademicStatus::Probation),
            "SUSPENDED" => Ok(AcademicStatus::Suspended),
            _ => Err(format!("Unknown academic status: {}", s)),
        }
    }
}
