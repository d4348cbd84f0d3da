//! Grade Calculator - GPA aggregation and standing thresholds
//!
//! Pure functions over grades and GPA. Thresholds come from a
//! [`GradingConfig`]; the default config is the institutional policy:
//!
//! | GPA          | max credits |
//! |--------------|-------------|
//! | >= 3.0       | 24          |
//! | 2.5 .. 3.0   | 21          |
//! | 2.0 .. 2.5   | 18          |
//! | < 2.0        | 15          |
//!
//! | semester | ACTIVE     | PROBATION        | SUSPENDED  |
//! |----------|------------|------------------|------------|
//! | 1-2      | >= 2.0     | < 2.0            | never      |
//! | 3-4      | >= 2.25    | 2.0 .. 2.25      | < 2.0      |
//! | 5+       | >= 2.5     | 2.0 .. 2.5       | < 2.0      |

use serde::{Deserialize, Serialize};

use crate::domain::entities::{CourseGrade, MAX_GRADE_POINT, MIN_GRADE_POINT};
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::value_objects::AcademicStatus;

/// GPA lower bound (inclusive) granting a credit allowance
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreditBand {
    pub min_gpa: f64,
    pub max_credits: u32,
}

/// Standing thresholds for a range of semesters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingBand {
    /// Last semester covered (inclusive); `None` covers every later semester
    pub up_to_semester: Option<u32>,
    /// GPA at or above this is ACTIVE
    pub active_min_gpa: f64,
    /// GPA at or above this (and below active) is PROBATION, below it SUSPENDED.
    /// `None` means the band never suspends.
    pub probation_min_gpa: Option<f64>,
}

/// Thresholds for credit limits and academic standing (configurable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GradingConfig {
    pub credit_bands: Vec<CreditBand>,
    /// Allowance when no credit band applies
    pub base_credits: u32,
    pub standing_bands: Vec<StandingBand>,
}

impl Default for GradingConfig {
    fn default() -> Self {
        Self {
            credit_bands: vec![
                CreditBand {
                    min_gpa: 3.0,
                    max_credits: 24,
                },
                CreditBand {
                    min_gpa: 2.5,
                    max_credits: 21,
                },
                CreditBand {
                    min_gpa: 2.0,
                    max_credits: 18,
                },
            ],
            base_credits: 15,
            standing_bands: vec![
                StandingBand {
                    up_to_semester: Some(2),
                    active_min_gpa: 2.0,
                    probation_min_gpa: None,
                },
                StandingBand {
                    up_to_semester: Some(4),
                    active_min_gpa: 2.25,
                    probation_min_gpa: Some(2.0),
                },
                StandingBand {
                    up_to_semester: None,
                    active_min_gpa: 2.5,
                    probation_min_gpa: Some(2.0),
                },
            ],
        }
    }
}

impl GradingConfig {
    /// Reject configs that cannot answer every valid input.
    pub fn validate(&self) -> DomainResult<()> {
        if self.open_band().is_none() {
            return Err(DomainError::config("Grading config needs an open-ended standing band"));
        }

        let mut thresholds: Vec<f64> = self.credit_bands.iter().map(|b| b.min_gpa).collect();
        for band in &self.standing_bands {
            thresholds.push(band.active_min_gpa);
            thresholds.extend(band.probation_min_gpa);
        }
        if thresholds.iter().any(|gpa| !on_scale(*gpa)) {
            return Err(DomainError::config("Grading thresholds must be between 0 and 4.0"));
        }

        Ok(())
    }

    /// Band covering `semester`: the tightest bounded band, else the open one.
    fn standing_band(&self, semester: u32) -> Option<&StandingBand> {
        self.standing_bands
            .iter()
            .filter(|b| b.up_to_semester.is_some_and(|last| semester <= last))
            .min_by_key(|b| b.up_to_semester)
            .or_else(|| self.open_band())
    }

    fn open_band(&self) -> Option<&StandingBand> {
        self.standing_bands
            .iter()
            .find(|b| b.up_to_semester.is_none())
    }
}

/// Grade points are weighed in ten-thousandths, so a GPA landing exactly on
/// a half-hundredth is seen as a tie and rounded up.
const GRADE_POINT_SCALE: f64 = 10_000.0;

/// Grade evaluation engine
#[derive(Debug, Clone, Default)]
pub struct GradeCalculator {
    config: GradingConfig,
}

impl GradeCalculator {
    /// Build a calculator, rejecting configs that cannot answer every input.
    pub fn new(config: Option<GradingConfig>) -> DomainResult<Self> {
        let config = config.unwrap_or_default();
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &GradingConfig {
        &self.config
    }

    /// Credit-weighted GPA rounded half-up to 2 decimals.
    ///
    /// No grades yields 0.0. Any grade point outside 0.0-4.0 fails the whole
    /// calculation.
    pub fn calculate_gpa(&self, grades: &[CourseGrade]) -> DomainResult<f64> {
        if grades.is_empty() {
            return Ok(0.0);
        }

        let mut total_points: u64 = 0;
        let mut total_credits: u32 = 0;

        for grade in grades {
            if !grade.has_valid_grade_point() {
                return Err(DomainError::invalid_argument(format!(
                    "Invalid grade point: {} for course {}",
                    grade.grade_point, grade.course_code
                )));
            }
            total_points += u64::from(grade.credits) * scaled_grade_point(grade.grade_point);
            total_credits = total_credits.saturating_add(grade.credits);
        }

        if total_credits == 0 {
            return Ok(0.0);
        }

        Ok(round_half_up(total_points, total_credits))
    }

    /// Maximum credits a student with `gpa` may take in one semester.
    pub fn calculate_max_credits(&self, gpa: f64) -> DomainResult<u32> {
        validate_gpa(gpa)?;

        Ok(self
            .config
            .credit_bands
            .iter()
            .filter(|band| gpa >= band.min_gpa)
            .map(|band| band.max_credits)
            .max()
            .unwrap_or(self.config.base_credits))
    }

    /// Academic standing for `gpa` in `semester` (1-based).
    pub fn determine_academic_status(
        &self,
        gpa: f64,
        semester: u32,
    ) -> DomainResult<AcademicStatus> {
        validate_gpa(gpa)?;
        if semester < 1 {
            return Err(DomainError::invalid_argument(format!(
                "Semester must be positive, got {semester}"
            )));
        }

        let band = self.config.standing_band(semester).ok_or_else(|| {
            DomainError::config(format!("No standing band covers semester {semester}"))
        })?;

        let status = if gpa >= band.active_min_gpa {
            AcademicStatus::Active
        } else {
            match band.probation_min_gpa {
                Some(min) if gpa < min => AcademicStatus::Suspended,
                _ => AcademicStatus::Probation,
            }
        };

        Ok(status)
    }
}

fn on_scale(value: f64) -> bool {
    (MIN_GRADE_POINT..=MAX_GRADE_POINT).contains(&value)
}

fn validate_gpa(gpa: f64) -> DomainResult<()> {
    if on_scale(gpa) {
        Ok(())
    } else {
        Err(DomainError::invalid_argument(format!(
            "GPA must be between 0 and 4.0, got {gpa}"
        )))
    }
}

/// Grade point in ten-thousandths. Callers validate the 0.0-4.0 range first.
fn scaled_grade_point(grade_point: f64) -> u64 {
    (grade_point * GRADE_POINT_SCALE).round() as u64
}

/// `points / credits` in GPA units, rounded half-up to 2 decimals.
fn round_half_up(points: u64, credits: u32) -> f64 {
    let per_hundredth = u64::from(credits) * (GRADE_POINT_SCALE as u64 / 100);
    let hundredths = (2 * points + per_hundredth) / (2 * per_hundredth);
    hundredths as f64 / 100.0
}
