//! Domain Errors
//!
//! Error types for enrollment workflows and grade evaluation.

use thiserror::Error;

/// Closed set of failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Requested student id has no matching record
    StudentNotFound,
    /// Requested course code has no matching record
    CourseNotFound,
    /// Enrolled count has reached capacity
    CourseFull,
    /// Prerequisite check returned false
    PrerequisiteNotMet,
    /// Generic enrollment-workflow rejection (e.g. suspended student)
    EnrollmentRejected,
    /// Caller-contract violation on grade calculator inputs
    InvalidArgument,
    /// Grading thresholds that cannot answer every valid input
    Config,
    /// A repository collaborator failed
    Repository,
    /// The notification collaborator failed
    Notification,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorKind::StudentNotFound => write!(f, "student_not_found"),
            ErrorKind::CourseNotFound => write!(f, "course_not_found"),
            ErrorKind::CourseFull => write!(f, "course_full"),
            ErrorKind::PrerequisiteNotMet => write!(f, "prerequisite_not_met"),
            ErrorKind::EnrollmentRejected => write!(f, "enrollment_rejected"),
            ErrorKind::InvalidArgument => write!(f, "invalid_argument"),
            ErrorKind::Config => write!(f, "config"),
            ErrorKind::Repository => write!(f, "repository"),
            ErrorKind::Notification => write!(f, "notification"),
        }
    }
}

/// Domain layer error: a kind, a message and an optional underlying cause.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct DomainError {
    kind: ErrorKind,
    message: String,
    #[source]
    cause: Option<anyhow::Error>,
}

pub type DomainResult<T> = Result<T, DomainError>;

impl DomainError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            cause: None,
        }
    }

    /// Attach the underlying cause.
    pub fn with_cause(mut self, cause: impl Into<anyhow::Error>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    pub fn student_not_found(student_id: &str) -> Self {
        Self::new(
            ErrorKind::StudentNotFound,
            format!("Student not found: {student_id}"),
        )
    }

    pub fn course_not_found(course_code: &str) -> Self {
        Self::new(
            ErrorKind::CourseNotFound,
            format!("Course not found: {course_code}"),
        )
    }

    pub fn course_full(course_code: &str, capacity: u32) -> Self {
        Self::new(
            ErrorKind::CourseFull,
            format!("Course {course_code} is full (capacity {capacity})"),
        )
    }

    pub fn prerequisite_not_met(student_id: &str, course_code: &str) -> Self {
        Self::new(
            ErrorKind::PrerequisiteNotMet,
            format!("Prerequisites not met: {student_id} for {course_code}"),
        )
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::EnrollmentRejected, message)
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidArgument, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn repository(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Repository, message)
    }

    pub fn notification(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Notification, message)
    }

    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// True for contract violations that do not depend on stored data.
    pub fn is_caller_error(&self) -> bool {
        self.kind == ErrorKind::InvalidArgument
    }
}
