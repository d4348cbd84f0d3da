//! Registrar Domain Library
//!
//! Core domain types and interfaces for course registration.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture / Hexagonal Architecture principles:
//!
//! - **Domain Layer** (`domain/`): Pure business entities and logic
//!   - `entities/`: Core domain models (Student, Course, Enrollment, CourseGrade)
//!   - `value_objects/`: Immutable value types (AcademicStatus)
//!   - `services/`: Grade evaluation (GradeCalculator)
//!   - `errors/`: Domain-specific error types
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits)
//!   - `repositories/`: Data access interfaces
//!   - `services/`: External service interfaces
//!
//! # Usage
//!
//! ```rust
//! use registrar::{CourseGrade, GradeCalculator};
//!
//! let calculator = GradeCalculator::default();
//! let gpa = calculator
//!     .calculate_gpa(&[CourseGrade::new("CS101", 3, 4.0), CourseGrade::new("CS102", 3, 3.0)])
//!     .unwrap();
//! assert_eq!(gpa, 3.5);
//! assert_eq!(calculator.calculate_max_credits(gpa).unwrap(), 24);
//! ```

pub mod domain;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    AcademicStatus, Course, CourseGrade, CreditBand, DomainError, DomainResult, Enrollment,
    ErrorKind, GradeCalculator, GradingConfig, StandingBand, Student, MAX_GRADE_POINT,
    MIN_GRADE_POINT, STATUS_APPROVED,
};
pub use ports::{CourseRepository, NotificationService, StudentRepository};
