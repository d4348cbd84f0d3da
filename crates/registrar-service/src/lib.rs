//! Registrar Service
//!
//! Application layer for course registration: the enrollment workflows
//! plus reference adapters for the domain ports.
//!
//! # Usage
//!
//! ```rust
//! use std::sync::Arc;
//!
//! use registrar::{AcademicStatus, Course, Student};
//! use registrar_service::adapters::{
//!     InMemoryCourseRepository, InMemoryStudentRepository, OutboxNotifier,
//! };
//! use registrar_service::{EnrollmentService, ServiceConfig};
//!
//! let config = ServiceConfig::default();
//! let students = Arc::new(InMemoryStudentRepository::new());
//! let courses = Arc::new(InMemoryCourseRepository::new(students.clone()));
//! let notifier = Arc::new(OutboxNotifier::with_config(config.notifications.clone()));
//!
//! let john = Student::new(
//!     "S001",
//!     "John Doe",
//!     "john@email.com",
//!     "Computer Science",
//!     3,
//!     3.5,
//!     AcademicStatus::Active,
//! );
//! students.insert(john).unwrap();
//! courses
//!     .insert(Course::new("CS301", "Algorithm Design", 3, 40, 30, "Dr. Smith"))
//!     .unwrap();
//!
//! let calculator = config.build_calculator().unwrap();
//! let service = EnrollmentService::new(students, courses, notifier.clone(), calculator);
//! let enrollment = service.enroll_course("S001", "CS301").unwrap();
//!
//! assert!(enrollment.is_approved());
//! assert_eq!(notifier.emails_sent(), 1);
//! ```

pub mod adapters;
pub mod application;
pub mod config;

pub use application::{EnrollmentService, DROP_SUBJECT, ENROLLMENT_SUBJECT};
pub use config::{NotificationConfig, ServiceConfig};
