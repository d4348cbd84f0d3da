//! Enrollment Application Service (Use Case)
//!
//! Orchestrates enroll/drop/credit-limit workflows over the student and
//! course repositories and the notification sink.
//!
//! Gates run in a fixed order and every gate fails before any write or
//! notification. Enroll:
//!
//! 1. student lookup
//! 2. suspended students rejected
//! 3. course lookup
//! 4. capacity (before prerequisites, which are then never queried)
//! 5. prerequisites
//! 6. course written back with `enrolled_count + 1`
//! 7. confirmation email
//!
//! The capacity check and the write-back are separate repository calls, so
//! two concurrent enrollments for the last seat can both pass step 4.
//! Atomicity belongs to the `CourseRepository` implementation.

use std::sync::Arc;

use registrar::{
    AcademicStatus, Course, CourseRepository, DomainError, Enrollment, GradeCalculator,
    NotificationService, Student, StudentRepository,
};

pub const ENROLLMENT_SUBJECT: &str = "Enrollment Confirmation";
pub const DROP_SUBJECT: &str = "Course Drop Confirmation";

/// Application service for enrollment operations
pub struct EnrollmentService<S, C, N>
where
    S: StudentRepository,
    C: CourseRepository,
    N: NotificationService,
{
    students: Arc<S>,
    courses: Arc<C>,
    notifier: Arc<N>,
    calculator: GradeCalculator,
}

impl<S, C, N> EnrollmentService<S, C, N>
where
    S: StudentRepository,
    C: CourseRepository,
    N: NotificationService,
{
    pub fn new(
        students: Arc<S>,
        courses: Arc<C>,
        notifier: Arc<N>,
        calculator: GradeCalculator,
    ) -> Self {
        Self {
            students,
            courses,
            notifier,
            calculator,
        }
    }

    pub fn calculator(&self) -> &GradeCalculator {
        &self.calculator
    }

    /// Enroll a student in a course
    pub fn enroll_course(
        &self,
        student_id: &str,
        course_code: &str,
    ) -> Result<Enrollment, DomainError> {
        let student = self.find_student(student_id)?;

        if student.is_suspended() {
            tracing::warn!(
                student_id,
                course_code,
                "Enrollment rejected: student suspended"
            );
            return Err(DomainError::rejected(format!(
                "Student {} is suspended and cannot enroll",
                student.id
            )));
        }

        let course = self.find_course(course_code)?;

        if !course.has_capacity() {
            tracing::warn!(
                student_id,
                course_code,
                capacity = course.capacity,
                "Enrollment rejected: course full"
            );
            return Err(DomainError::course_full(&course.code, course.capacity));
        }

        if !self.courses.is_prerequisite_met(student_id, course_code)? {
            tracing::warn!(
                student_id,
                course_code,
                "Enrollment rejected: prerequisites not met"
            );
            return Err(DomainError::prerequisite_not_met(student_id, course_code));
        }

        let updated = course.with_enrolled_count(course.enrolled_count + 1);
        self.write_course(&updated)?;

        let enrollment = Enrollment::approved(student_id, course_code);

        let body = format!(
            "You have been enrolled in {} ({}).",
            course.name, course.code
        );
        self.notify(&student.email, ENROLLMENT_SUBJECT, &body)?;

        tracing::info!(
            "Enrolled {} in {} ({}/{}) - {}",
            student_id,
            course_code,
            updated.enrolled_count,
            updated.capacity,
            enrollment.id
        );

        Ok(enrollment)
    }

    /// Drop a student from a course
    ///
    /// Refuses to take `enrolled_count` below zero; the count is never
    /// decremented past an empty course.
    pub fn drop_course(&self, student_id: &str, course_code: &str) -> Result<(), DomainError> {
        let student = self.find_student(student_id)?;
        let course = self.find_course(course_code)?;

        let remaining = course.enrolled_count.checked_sub(1).ok_or_else(|| {
            tracing::warn!(
                student_id,
                course_code,
                "Drop rejected: course has no enrollments"
            );
            DomainError::rejected(format!("Course {} has no enrolled students", course.code))
        })?;

        let updated = course.with_enrolled_count(remaining);
        self.write_course(&updated)?;

        let body = format!("You have dropped {} ({}).", course.name, course.code);
        self.notify(&student.email, DROP_SUBJECT, &body)?;

        tracing::info!(
            "Dropped {} from {} ({}/{})",
            student_id,
            course_code,
            updated.enrolled_count,
            updated.capacity
        );

        Ok(())
    }

    /// Whether `requested_credits` fits the student's GPA-based allowance
    pub fn validate_credit_limit(
        &self,
        student_id: &str,
        requested_credits: u32,
    ) -> Result<bool, DomainError> {
        let max_credits = self.max_credits_for(student_id)?;
        Ok(requested_credits <= max_credits)
    }

    /// Credit allowance for the student's current GPA
    pub fn max_credits_for(&self, student_id: &str) -> Result<u32, DomainError> {
        let student = self.find_student(student_id)?;
        self.calculator.calculate_max_credits(student.gpa)
    }

    /// Standing the student's GPA and semester call for.
    ///
    /// Evaluation only: the stored status is not written back.
    pub fn evaluate_academic_status(
        &self,
        student_id: &str,
    ) -> Result<AcademicStatus, DomainError> {
        let student = self.find_student(student_id)?;
        let status = self
            .calculator
            .determine_academic_status(student.gpa, student.semester)?;

        if status != student.academic_status {
            tracing::debug!(
                student_id,
                stored = %student.academic_status,
                evaluated = %status,
                "Academic status differs from stored value"
            );
        }

        Ok(status)
    }

    fn find_student(&self, student_id: &str) -> Result<Student, DomainError> {
        self.students
            .find_by_id(student_id)?
            .ok_or_else(|| DomainError::student_not_found(student_id))
    }

    fn find_course(&self, course_code: &str) -> Result<Course, DomainError> {
        self.courses
            .find_by_course_code(course_code)?
            .ok_or_else(|| DomainError::course_not_found(course_code))
    }

    fn write_course(&self, course: &Course) -> Result<(), DomainError> {
        if let Err(err) = self.courses.update(course) {
            tracing::error!(
                kind = %err.kind(),
                course_code = %course.code,
                "Course write failed: {}",
                err
            );
            return Err(err);
        }
        Ok(())
    }

    /// The course write is not rolled back when the confirmation fails.
    fn notify(&self, address: &str, subject: &str, body: &str) -> Result<(), DomainError> {
        if let Err(err) = self.notifier.send_email(address, subject, body) {
            tracing::error!(
                kind = %err.kind(),
                subject,
                "Confirmation not sent: {}",
                err
            );
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use registrar::ErrorKind;
    use std::collections::HashMap;
    use std::sync::Mutex;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        FindStudent(String),
        FindCourse(String),
        PrerequisiteCheck(String, String),
        UpdateCourse(Course),
        SendEmail {
            to: String,
            subject: String,
            body: String,
        },
    }

    type CallLog = Arc<Mutex<Vec<Call>>>;

    struct StubStudents {
        log: CallLog,
        students: HashMap<String, Student>,
    }

    impl StudentRepository for StubStudents {
        fn find_by_id(&self, student_id: &str) -> Result<Option<Student>, DomainError> {
            self.log
                .lock()
                .unwrap()
                .push(Call::FindStudent(student_id.to_string()));
            Ok(self.students.get(student_id).cloned())
        }

        fn update(&self, _student: &Student) -> Result<(), DomainError> {
            Ok(())
        }

        fn get_completed_courses(&self, _student_id: &str) -> Result<Vec<Course>, DomainError> {
            Ok(Vec::new())
        }
    }

    struct StubCourses {
        log: CallLog,
        courses: Mutex<HashMap<String, Course>>,
        prerequisites_met: bool,
        fail_update: bool,
    }

    impl CourseRepository for StubCourses {
        fn find_by_course_code(&self, course_code: &str) -> Result<Option<Course>, DomainError> {
            self.log
                .lock()
                .unwrap()
                .push(Call::FindCourse(course_code.to_string()));
            Ok(self.courses.lock().unwrap().get(course_code).cloned())
        }

        fn update(&self, course: &Course) -> Result<(), DomainError> {
            if self.fail_update {
                return Err(DomainError::repository("write failed"));
            }
            self.log
                .lock()
                .unwrap()
                .push(Call::UpdateCourse(course.clone()));
            self.courses
                .lock()
                .unwrap()
                .insert(course.code.clone(), course.clone());
            Ok(())
        }

        fn is_prerequisite_met(
            &self,
            student_id: &str,
            course_code: &str,
        ) -> Result<bool, DomainError> {
            self.log.lock().unwrap().push(Call::PrerequisiteCheck(
                student_id.to_string(),
                course_code.to_string(),
            ));
            Ok(self.prerequisites_met)
        }
    }

    struct StubNotifier {
        log: CallLog,
        fail_email: bool,
    }

    impl NotificationService for StubNotifier {
        fn send_email(&self, address: &str, subject: &str, body: &str) -> Result<(), DomainError> {
            if self.fail_email {
                return Err(DomainError::notification("mail relay unavailable"));
            }
            self.log.lock().unwrap().push(Call::SendEmail {
                to: address.to_string(),
                subject: subject.to_string(),
                body: body.to_string(),
            });
            Ok(())
        }

        fn send_sms(&self, _phone: &str, _body: &str) -> Result<(), DomainError> {
            Ok(())
        }
    }

    type Service = EnrollmentService<StubStudents, StubCourses, StubNotifier>;

    /// Collaborator misbehaviour injected into a fixture
    #[derive(Default)]
    struct Faults {
        prerequisites_unmet: bool,
        fail_update: bool,
        fail_email: bool,
    }

    struct Fixture {
        service: Service,
        log: CallLog,
    }

    impl Fixture {
        fn new(students: Vec<Student>, courses: Vec<Course>) -> Self {
            Self::build(students, courses, Faults::default())
        }

        fn build(students: Vec<Student>, courses: Vec<Course>, faults: Faults) -> Self {
            let log: CallLog = Arc::new(Mutex::new(Vec::new()));
            let students = StubStudents {
                log: log.clone(),
                students: students.into_iter().map(|s| (s.id.clone(), s)).collect(),
            };
            let courses = StubCourses {
                log: log.clone(),
                courses: Mutex::new(courses.into_iter().map(|c| (c.code.clone(), c)).collect()),
                prerequisites_met: !faults.prerequisites_unmet,
                fail_update: faults.fail_update,
            };
            let notifier = StubNotifier {
                log: log.clone(),
                fail_email: faults.fail_email,
            };
            let service = EnrollmentService::new(
                Arc::new(students),
                Arc::new(courses),
                Arc::new(notifier),
                GradeCalculator::default(),
            );
            Self { service, log }
        }

        fn calls(&self) -> Vec<Call> {
            self.log.lock().unwrap().clone()
        }

        fn updates(&self) -> Vec<Course> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    Call::UpdateCourse(course) => Some(course),
                    _ => None,
                })
                .collect()
        }

        fn emails(&self) -> Vec<(String, String, String)> {
            self.calls()
                .into_iter()
                .filter_map(|c| match c {
                    Call::SendEmail { to, subject, body } => Some((to, subject, body)),
                    _ => None,
                })
                .collect()
        }

        fn prerequisite_checks(&self) -> usize {
            self.calls()
                .iter()
                .filter(|c| matches!(c, Call::PrerequisiteCheck(..)))
                .count()
        }
    }

    fn student(id: &str, gpa: f64, status: AcademicStatus) -> Student {
        Student::new(
            id,
            "John Doe",
            "john@email.com",
            "Computer Science",
            3,
            gpa,
            status,
        )
    }

    fn algorithms(enrolled: u32) -> Course {
        Course::new("CS301", "Algorithm Design", 3, 40, enrolled, "Dr. Smith")
    }

    #[test]
    fn test_enroll_success() {
        let fx = Fixture::new(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(30)],
        );

        let enrollment = fx.service.enroll_course("S001", "CS301").unwrap();

        assert_eq!(enrollment.student_id, "S001");
        assert_eq!(enrollment.course_code, "CS301");
        assert_eq!(enrollment.status, "APPROVED");
        assert!(!enrollment.id.is_nil());

        let updates = fx.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].enrolled_count, 31);

        let emails = fx.emails();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].0, "john@email.com");
        assert_eq!(emails[0].1, "Enrollment Confirmation");
        assert!(emails[0].2.contains("Algorithm Design"));
    }

    #[test]
    fn test_enroll_call_order() {
        let fx = Fixture::new(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(30)],
        );

        fx.service.enroll_course("S001", "CS301").unwrap();

        let calls = fx.calls();
        assert_eq!(calls.len(), 5);
        assert_eq!(calls[0], Call::FindStudent("S001".into()));
        assert_eq!(calls[1], Call::FindCourse("CS301".into()));
        assert_eq!(
            calls[2],
            Call::PrerequisiteCheck("S001".into(), "CS301".into())
        );
        assert!(matches!(calls[3], Call::UpdateCourse(_)));
        assert!(matches!(calls[4], Call::SendEmail { .. }));
    }

    #[test]
    fn test_enroll_unique_ids() {
        let fx = Fixture::new(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![
                algorithms(30),
                Course::new("CS302", "Database", 3, 40, 25, "Dr. Lee"),
            ],
        );

        let first = fx.service.enroll_course("S001", "CS301").unwrap();
        let second = fx.service.enroll_course("S001", "CS302").unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_enroll_student_not_found() {
        let fx = Fixture::new(vec![], vec![algorithms(30)]);

        let err = fx.service.enroll_course("INVALID", "CS301").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::StudentNotFound);
        assert!(err.message().contains("Student not found"));
        assert_eq!(fx.calls(), vec![Call::FindStudent("INVALID".into())]);
    }

    #[test]
    fn test_enroll_suspended_student_rejected_before_course_lookup() {
        let fx = Fixture::new(
            vec![student("S002", 1.5, AcademicStatus::Suspended)],
            vec![algorithms(30)],
        );

        let err = fx.service.enroll_course("S002", "CS301").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EnrollmentRejected);
        assert!(err.message().contains("suspended"));
        assert_eq!(fx.calls(), vec![Call::FindStudent("S002".into())]);
    }

    #[test]
    fn test_enroll_probation_student_allowed() {
        let fx = Fixture::new(
            vec![student("S003", 2.1, AcademicStatus::Probation)],
            vec![algorithms(30)],
        );

        let enrollment = fx.service.enroll_course("S003", "CS301").unwrap();

        assert!(enrollment.is_approved());
        assert_eq!(fx.emails().len(), 1);
    }

    #[test]
    fn test_enroll_course_not_found() {
        let fx = Fixture::new(vec![student("S001", 3.5, AcademicStatus::Active)], vec![]);

        let err = fx.service.enroll_course("S001", "INVALID").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CourseNotFound);
        assert!(err.message().contains("Course not found"));
        assert!(fx.updates().is_empty());
        assert!(fx.emails().is_empty());
    }

    #[test]
    fn test_enroll_course_full_skips_prerequisite_check() {
        let fx = Fixture::new(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(40)],
        );

        let err = fx.service.enroll_course("S001", "CS301").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::CourseFull);
        assert!(err.message().contains("full"));
        assert_eq!(fx.prerequisite_checks(), 0);
        assert!(fx.updates().is_empty());
        assert!(fx.emails().is_empty());
    }

    #[test]
    fn test_enroll_last_seat() {
        let testing = Course::new("CS303", "Software Testing", 3, 40, 39, "Dr. Brown");
        let fx = Fixture::new(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![testing],
        );

        fx.service.enroll_course("S001", "CS303").unwrap();

        assert_eq!(fx.updates()[0].enrolled_count, 40);
    }

    #[test]
    fn test_enroll_prerequisite_not_met() {
        let fx = Fixture::build(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(30)],
            Faults {
                prerequisites_unmet: true,
                ..Faults::default()
            },
        );

        let err = fx.service.enroll_course("S001", "CS301").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::PrerequisiteNotMet);
        assert!(err.message().contains("Prerequisites not met"));
        assert_eq!(fx.prerequisite_checks(), 1);
        assert!(fx.updates().is_empty());
        assert!(fx.emails().is_empty());
    }

    #[test]
    fn test_enroll_repository_failure_sends_nothing() {
        let fx = Fixture::build(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(30)],
            Faults {
                fail_update: true,
                ..Faults::default()
            },
        );

        let err = fx.service.enroll_course("S001", "CS301").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Repository);
        assert!(fx.emails().is_empty());
    }

    #[test]
    fn test_enroll_notification_failure_keeps_course_write() {
        let fx = Fixture::build(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(30)],
            Faults {
                fail_email: true,
                ..Faults::default()
            },
        );

        let err = fx.service.enroll_course("S001", "CS301").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Notification);
        assert_eq!(err.message(), "mail relay unavailable");
        let updates = fx.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].enrolled_count, 31);
        assert!(fx.emails().is_empty());
    }

    #[test]
    fn test_enroll_keeps_special_characters_in_email() {
        let mut frank = student("S007", 3.5, AcademicStatus::Active);
        frank.email = "frank.o'connor+test@email.com".to_string();
        let fx = Fixture::new(vec![frank], vec![algorithms(30)]);

        fx.service.enroll_course("S007", "CS301").unwrap();

        assert_eq!(fx.emails()[0].0, "frank.o'connor+test@email.com");
    }

    #[test]
    fn test_drop_success() {
        let fx = Fixture::new(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(30)],
        );

        fx.service.drop_course("S001", "CS301").unwrap();

        assert_eq!(fx.updates()[0].enrolled_count, 29);
        let emails = fx.emails();
        assert_eq!(emails.len(), 1);
        assert_eq!(emails[0].1, "Course Drop Confirmation");
        assert!(emails[0].2.contains("Algorithm Design"));
    }

    #[test]
    fn test_drop_notification_failure_keeps_course_write() {
        let fx = Fixture::build(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(30)],
            Faults {
                fail_email: true,
                ..Faults::default()
            },
        );

        let err = fx.service.drop_course("S001", "CS301").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::Notification);
        let updates = fx.updates();
        assert_eq!(updates.len(), 1);
        assert_eq!(updates[0].enrolled_count, 29);
    }

    #[test]
    fn test_drop_never_checks_prerequisites() {
        let fx = Fixture::new(
            vec![student("S001", 3.5, AcademicStatus::Suspended)],
            vec![algorithms(1)],
        );

        fx.service.drop_course("S001", "CS301").unwrap();

        assert_eq!(fx.prerequisite_checks(), 0);
        assert_eq!(fx.updates()[0].enrolled_count, 0);
    }

    #[test]
    fn test_drop_empty_course_rejected() {
        let fx = Fixture::new(
            vec![student("S001", 3.5, AcademicStatus::Active)],
            vec![algorithms(0)],
        );

        let err = fx.service.drop_course("S001", "CS301").unwrap_err();

        assert_eq!(err.kind(), ErrorKind::EnrollmentRejected);
        assert!(fx.updates().is_empty());
        assert!(fx.emails().is_empty());
    }

    #[test]
    fn test_drop_missing_entities() {
        let fx = Fixture::new(vec![student("S001", 3.5, AcademicStatus::Active)], vec![]);

        let err = fx.service.drop_course("S404", "CS301").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StudentNotFound);

        let err = fx.service.drop_course("S001", "CS404").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CourseNotFound);

        assert!(fx.updates().is_empty());
        assert!(fx.emails().is_empty());
    }

    #[test]
    fn test_validate_credit_limit() {
        let fx = Fixture::new(
            vec![
                student("S004", 3.5, AcademicStatus::Active),
                student("S005", 2.7, AcademicStatus::Active),
                student("S006", 2.3, AcademicStatus::Active),
                student("S007", 1.8, AcademicStatus::Probation),
            ],
            vec![],
        );
        let svc = &fx.service;

        assert!(svc.validate_credit_limit("S004", 24).unwrap());
        assert!(!svc.validate_credit_limit("S004", 25).unwrap());
        assert!(svc.validate_credit_limit("S005", 21).unwrap());
        assert!(!svc.validate_credit_limit("S005", 22).unwrap());
        assert!(svc.validate_credit_limit("S006", 18).unwrap());
        assert!(!svc.validate_credit_limit("S006", 19).unwrap());
        assert!(svc.validate_credit_limit("S007", 15).unwrap());
        assert!(!svc.validate_credit_limit("S007", 16).unwrap());
        assert!(svc.validate_credit_limit("S007", 0).unwrap());
    }

    #[test]
    fn test_validate_credit_limit_errors() {
        let fx = Fixture::new(vec![student("S008", 4.2, AcademicStatus::Active)], vec![]);

        let err = fx.service.validate_credit_limit("S404", 12).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::StudentNotFound);

        let err = fx.service.validate_credit_limit("S008", 12).unwrap_err();
        assert!(err.is_caller_error());
    }

    #[test]
    fn test_evaluate_academic_status() {
        let mut sophomore = student("S010", 1.99, AcademicStatus::Active);
        sophomore.semester = 1;
        let mut junior = student("S011", 1.99, AcademicStatus::Active);
        junior.semester = 3;
        let fx = Fixture::new(vec![sophomore, junior], vec![]);

        assert_eq!(
            fx.service.evaluate_academic_status("S010").unwrap(),
            AcademicStatus::Probation
        );
        assert_eq!(
            fx.service.evaluate_academic_status("S011").unwrap(),
            AcademicStatus::Suspended
        );
    }
}
