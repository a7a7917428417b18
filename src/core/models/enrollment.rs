//! Enrollment model

use super::{CourseCode, Grade};
use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A student's registration in one course
///
/// The (student, course) pair and the enrollment timestamp never change; only the
/// grade may be set and overwritten.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrollment {
    student_reg_no: String,
    course_code: CourseCode,
    grade: Option<Grade>,
    enrolled_at: NaiveDateTime,
}

impl Enrollment {
    /// Create an ungraded enrollment stamped with the current local time
    #[must_use]
    pub fn new(student_reg_no: String, course_code: CourseCode) -> Self {
        Self::restore(student_reg_no, course_code, None, Local::now().naive_local())
    }

    /// Rebuild a persisted enrollment
    #[must_use]
    pub const fn restore(
        student_reg_no: String,
        course_code: CourseCode,
        grade: Option<Grade>,
        enrolled_at: NaiveDateTime,
    ) -> Self {
        Self {
            student_reg_no,
            course_code,
            grade,
            enrolled_at,
        }
    }

    /// Registration number of the owning student
    #[must_use]
    pub fn student_reg_no(&self) -> &str {
        &self.student_reg_no
    }

    /// Code of the enrolled course
    #[must_use]
    pub const fn course_code(&self) -> &CourseCode {
        &self.course_code
    }

    /// Grade, if one has been assigned
    #[must_use]
    pub const fn grade(&self) -> Option<Grade> {
        self.grade
    }

    /// When the enrollment was made
    #[must_use]
    pub const fn enrolled_at(&self) -> NaiveDateTime {
        self.enrolled_at
    }

    /// Set or overwrite the grade
    pub fn set_grade(&mut self, grade: Grade) {
        self.grade = Some(grade);
    }
}

impl fmt::Display for Enrollment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let grade = self
            .grade
            .map_or_else(|| "Not Graded".to_string(), |g| g.to_string());
        write!(
            f,
            "Course: {}, Enrolled: {}, Grade: {grade}",
            self.course_code,
            self.enrolled_at.date()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_enrollment_is_ungraded() {
        let enrollment = Enrollment::new("STU001".to_string(), CourseCode::new("CS101").unwrap());
        assert_eq!(enrollment.student_reg_no(), "STU001");
        assert_eq!(enrollment.course_code().as_str(), "CS101");
        assert!(enrollment.grade().is_none());
        assert!(enrollment.to_string().contains("Not Graded"));
    }

    #[test]
    fn test_grade_can_be_overwritten() {
        let mut enrollment =
            Enrollment::new("STU001".to_string(), CourseCode::new("CS101").unwrap());
        let enrolled_at = enrollment.enrolled_at();

        enrollment.set_grade(Grade::B);
        enrollment.set_grade(Grade::A);

        assert_eq!(enrollment.grade(), Some(Grade::A));
        assert_eq!(enrollment.enrolled_at(), enrolled_at);
    }
}
