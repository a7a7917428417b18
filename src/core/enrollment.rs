//! Enrollment engine
//!
//! Links students to courses under the campus enrollment rules and records grades.
//! Every rule is checked before the student's enrollment list is touched, so a
//! rejected call leaves the directory exactly as it found it.

use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Enrollment, Grade, Student};
use crate::core::registry::{CourseCatalog, StudentDirectory};
use crate::{debug, info, warn};

/// Default maximum credits a student may carry in one semester
pub const DEFAULT_MAX_CREDITS_PER_SEMESTER: u32 = 18;

/// Applies enrollment and grading rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnrollmentService {
    max_credits_per_semester: u32,
}

impl Default for EnrollmentService {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CREDITS_PER_SEMESTER)
    }
}

impl EnrollmentService {
    /// Engine enforcing the given per-semester credit cap
    #[must_use]
    pub const fn new(max_credits_per_semester: u32) -> Self {
        Self {
            max_credits_per_semester,
        }
    }

    /// Configured per-semester credit cap
    #[must_use]
    pub const fn max_credits_per_semester(&self) -> u32 {
        self.max_credits_per_semester
    }

    /// Enroll a student in a course
    ///
    /// # Errors
    /// - [`RecordsError::NotFound`] if either the student or the course does not resolve
    /// - [`RecordsError::DuplicateEnrollment`] if the student already holds the course
    /// - [`RecordsError::CreditLimitExceeded`] if the course would push the student's load
    ///   in that semester over the cap
    pub fn enroll(
        &self,
        students: &mut StudentDirectory,
        courses: &CourseCatalog,
        reg_no: &str,
        course_code: &str,
    ) -> Result<()> {
        let student = students
            .find_by_reg_no_mut(reg_no)
            .ok_or_else(|| RecordsError::student_not_found(reg_no))?;
        let course = courses
            .find_by_code(course_code)
            .ok_or_else(|| RecordsError::course_not_found(course_code))?;

        if student
            .enrollments()
            .iter()
            .any(|e| e.course_code().matches(course.code().as_str()))
        {
            warn!(
                "Rejected duplicate enrollment of {} in {}",
                student.reg_no(),
                course.code()
            );
            return Err(RecordsError::DuplicateEnrollment {
                reg_no: student.reg_no().to_string(),
                course_code: course.code().to_string(),
            });
        }

        let current = semester_load(student, courses, course);
        if current + course.credits() > self.max_credits_per_semester {
            warn!(
                "Rejected enrollment of {} in {}: {current} + {} credits exceeds {}",
                student.reg_no(),
                course.code(),
                course.credits(),
                self.max_credits_per_semester
            );
            return Err(RecordsError::CreditLimitExceeded {
                limit: self.max_credits_per_semester,
                current,
                requested: course.credits(),
                semester: course.semester(),
            });
        }

        let enrollment = Enrollment::new(student.reg_no().to_string(), course.code().clone());
        student.push_enrollment(enrollment);
        info!(
            "Enrolled {} in {} ({} credits, {} load now {})",
            student.reg_no(),
            course.code(),
            course.credits(),
            course.semester(),
            current + course.credits()
        );
        Ok(())
    }

    /// Record a grade for an existing enrollment, overwriting any previous grade
    ///
    /// # Errors
    /// - [`RecordsError::NotFound`] if the student does not resolve
    /// - [`RecordsError::NotEnrolled`] if the student holds no enrollment for the course
    #[allow(clippy::unused_self)]
    pub fn assign_grade(
        &self,
        students: &mut StudentDirectory,
        reg_no: &str,
        course_code: &str,
        grade: Grade,
    ) -> Result<()> {
        let student = students
            .find_by_reg_no_mut(reg_no)
            .ok_or_else(|| RecordsError::student_not_found(reg_no))?;
        let reg_no = student.reg_no().to_string();

        let enrollment =
            student
                .enrollment_mut(course_code)
                .ok_or_else(|| RecordsError::NotEnrolled {
                    reg_no: reg_no.clone(),
                    course_code: course_code.to_string(),
                })?;

        if let Some(previous) = enrollment.grade() {
            debug!("Overwriting grade {previous} for {reg_no} in {course_code}");
        }
        enrollment.set_grade(grade);
        info!("Assigned grade {grade} to {reg_no} in {course_code}");
        Ok(())
    }
}

/// Credits the student already carries in `target`'s semester.
/// Enrollments whose course no longer resolves are skipped.
fn semester_load(student: &Student, courses: &CourseCatalog, target: &Course) -> u32 {
    student
        .enrollments()
        .iter()
        .filter_map(|e| courses.find_by_code(e.course_code().as_str()))
        .filter(|c| c.semester() == target.semester())
        .map(Course::credits)
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{CourseCode, Semester};

    fn course(code: &str, credits: u32, semester: Semester) -> Course {
        Course::builder(code, format!("Course {code}"))
            .credits(credits)
            .semester(semester)
            .build()
            .unwrap()
    }

    fn setup() -> (StudentDirectory, CourseCatalog) {
        let mut students = StudentDirectory::new();
        students.register("Ada Lovelace", "ada@campus.edu").unwrap();
        let mut courses = CourseCatalog::new();
        courses.add(course("CS101", 4, Semester::Fall));
        courses.add(course("CS102", 4, Semester::Spring));
        (students, courses)
    }

    fn enrollment_count(students: &StudentDirectory) -> usize {
        students.find_by_reg_no("STU001").unwrap().enrollments().len()
    }

    #[test]
    fn test_enroll_appends_ungraded_enrollment() {
        let (mut students, courses) = setup();
        let engine = EnrollmentService::default();

        engine.enroll(&mut students, &courses, "stu001", "cs101").unwrap();

        let student = students.find_by_reg_no("STU001").unwrap();
        assert_eq!(student.enrollments().len(), 1);
        let enrollment = &student.enrollments()[0];
        assert_eq!(enrollment.student_reg_no(), "STU001");
        assert_eq!(enrollment.course_code().as_str(), "CS101");
        assert!(enrollment.grade().is_none());
    }

    #[test]
    fn test_duplicate_check_ignores_stored_code_case() {
        let (mut students, courses) = setup();
        let stored = CourseCode::new("cs101").unwrap();
        students
            .find_by_reg_no_mut("STU001")
            .unwrap()
            .push_enrollment(Enrollment::new("STU001".to_string(), stored));

        let err = EnrollmentService::default()
            .enroll(&mut students, &courses, "STU001", "CS101")
            .unwrap_err();
        assert!(matches!(err, RecordsError::DuplicateEnrollment { .. }));
        assert_eq!(enrollment_count(&students), 1);
    }

    #[test]
    fn test_unknown_student_or_course() {
        let (mut students, courses) = setup();
        let engine = EnrollmentService::default();

        let err = engine
            .enroll(&mut students, &courses, "STU999", "CS101")
            .unwrap_err();
        assert!(matches!(err, RecordsError::NotFound { .. }));

        let err = engine
            .enroll(&mut students, &courses, "STU001", "XX000")
            .unwrap_err();
        assert!(matches!(err, RecordsError::NotFound { .. }));
        assert_eq!(enrollment_count(&students), 0);
    }

    #[test]
    fn test_duplicate_is_rejected_without_mutation() {
        let (mut students, courses) = setup();
        let engine = EnrollmentService::default();

        engine.enroll(&mut students, &courses, "STU001", "CS101").unwrap();
        let err = engine
            .enroll(&mut students, &courses, "STU001", "cs101")
            .unwrap_err();

        assert!(matches!(err, RecordsError::DuplicateEnrollment { .. }));
        assert_eq!(enrollment_count(&students), 1);
    }

    #[test]
    fn test_credit_limit_counts_only_same_semester() {
        let (mut students, mut courses) = setup();
        courses.add(course("CS201", 4, Semester::Fall));
        let engine = EnrollmentService::new(8);

        engine.enroll(&mut students, &courses, "STU001", "CS101").unwrap();
        engine.enroll(&mut students, &courses, "STU001", "CS102").unwrap();
        engine.enroll(&mut students, &courses, "STU001", "CS201").unwrap();

        courses.add(course("CS301", 1, Semester::Fall));
        let err = engine
            .enroll(&mut students, &courses, "STU001", "CS301")
            .unwrap_err();
        match err {
            RecordsError::CreditLimitExceeded {
                limit,
                current,
                requested,
                semester,
            } => {
                assert_eq!(limit, 8);
                assert_eq!(current, 8);
                assert_eq!(requested, 1);
                assert_eq!(semester, Semester::Fall);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert_eq!(enrollment_count(&students), 3);
    }

    #[test]
    fn test_load_exactly_at_cap_is_allowed() {
        let (mut students, mut courses) = setup();
        courses.add(course("BIG", 18, Semester::Summer));
        let engine = EnrollmentService::default();

        engine.enroll(&mut students, &courses, "STU001", "BIG").unwrap();
        assert_eq!(enrollment_count(&students), 1);
    }

    #[test]
    fn test_unresolvable_enrollments_do_not_count() {
        let (mut students, courses) = setup();
        let engine = EnrollmentService::new(4);
        engine.enroll(&mut students, &courses, "STU001", "CS101").unwrap();

        // Catalog reloaded without CS101: the orphaned enrollment carries no credits.
        let mut reloaded = CourseCatalog::new();
        reloaded.add(course("CS201", 4, Semester::Fall));
        engine.enroll(&mut students, &reloaded, "STU001", "CS201").unwrap();
        assert_eq!(enrollment_count(&students), 2);
    }

    #[test]
    fn test_assign_grade_and_overwrite() {
        let (mut students, courses) = setup();
        let engine = EnrollmentService::default();
        engine.enroll(&mut students, &courses, "STU001", "CS101").unwrap();

        engine
            .assign_grade(&mut students, "STU001", "cs101", Grade::B)
            .unwrap();
        engine
            .assign_grade(&mut students, "STU001", "CS101", Grade::S)
            .unwrap();

        let student = students.find_by_reg_no("STU001").unwrap();
        assert_eq!(student.enrollments()[0].grade(), Some(Grade::S));
    }

    #[test]
    fn test_assign_grade_requires_enrollment() {
        let (mut students, _courses) = setup();
        let engine = EnrollmentService::default();

        let err = engine
            .assign_grade(&mut students, "STU001", "CS101", Grade::A)
            .unwrap_err();
        assert!(matches!(err, RecordsError::NotEnrolled { .. }));
        assert_eq!(enrollment_count(&students), 0);

        let err = engine
            .assign_grade(&mut students, "STU404", "CS101", Grade::A)
            .unwrap_err();
        assert!(matches!(err, RecordsError::NotFound { .. }));
    }
}
