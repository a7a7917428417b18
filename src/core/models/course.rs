//! Course model

use super::Semester;
use crate::core::error::{RecordsError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Course identity code (e.g., "CS101")
///
/// Equality and hashing use the exact code; registry lookups use [`matches`](Self::matches),
/// which ignores ASCII case.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CourseCode(String);

impl CourseCode {
    /// Wrap a code
    ///
    /// # Errors
    /// Returns [`RecordsError::InvalidCourse`] if the code is empty or only whitespace
    pub fn new(code: impl Into<String>) -> Result<Self> {
        let code = code.into();
        if code.trim().is_empty() {
            return Err(RecordsError::InvalidCourse(
                "course code cannot be empty".to_string(),
            ));
        }
        Ok(Self(code))
    }

    /// The raw code
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Case-insensitive comparison against a user-supplied code
    #[must_use]
    pub fn matches(&self, code: &str) -> bool {
        self.0.eq_ignore_ascii_case(code)
    }
}

impl fmt::Display for CourseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// A course offered by the campus
///
/// Everything but the active flag is fixed at construction; build one with [`Course::builder`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Course {
    code: CourseCode,
    title: String,
    credits: u32,
    instructor: String,
    semester: Semester,
    department: String,
    active: bool,
}

impl Course {
    /// Start building a course from its required fields
    #[must_use]
    pub fn builder(code: impl Into<String>, title: impl Into<String>) -> CourseBuilder {
        CourseBuilder::new(code, title)
    }

    /// Course code
    #[must_use]
    pub const fn code(&self) -> &CourseCode {
        &self.code
    }

    /// Course title
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Credit count
    #[must_use]
    pub const fn credits(&self) -> u32 {
        self.credits
    }

    /// Instructor name
    #[must_use]
    pub fn instructor(&self) -> &str {
        &self.instructor
    }

    /// Semester the course runs in
    #[must_use]
    pub const fn semester(&self) -> Semester {
        self.semester
    }

    /// Owning department
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Whether the course is open
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Open or close the course
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<10} | {:<30} | {:<2} | {:<20} | {:<10} | {:<20}",
            self.code, self.title, self.credits, self.instructor, self.semester, self.department
        )
    }
}

/// Staged builder for [`Course`]
#[derive(Debug, Clone)]
pub struct CourseBuilder {
    code: String,
    title: String,
    credits: u32,
    instructor: String,
    semester: Option<Semester>,
    department: String,
}

impl CourseBuilder {
    fn new(code: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            credits: 0,
            instructor: String::new(),
            semester: None,
            department: String::new(),
        }
    }

    /// Set the credit count
    #[must_use]
    pub const fn credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Set the instructor name
    #[must_use]
    pub fn instructor(mut self, instructor: impl Into<String>) -> Self {
        self.instructor = instructor.into();
        self
    }

    /// Set the semester
    #[must_use]
    pub const fn semester(mut self, semester: Semester) -> Self {
        self.semester = Some(semester);
        self
    }

    /// Set the department
    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.department = department.into();
        self
    }

    /// Finalize the course
    ///
    /// # Errors
    /// Returns [`RecordsError::InvalidCourse`] if the code or title is blank, credits are
    /// zero, or no semester was given
    pub fn build(self) -> Result<Course> {
        let code = CourseCode::new(self.code)?;
        if self.title.trim().is_empty() {
            return Err(RecordsError::InvalidCourse(format!(
                "course {code} has an empty title"
            )));
        }
        if self.credits == 0 {
            return Err(RecordsError::InvalidCourse(format!(
                "course {code} must carry a positive number of credits"
            )));
        }
        let semester = self.semester.ok_or_else(|| {
            RecordsError::InvalidCourse(format!("course {code} has no semester"))
        })?;

        Ok(Course {
            code,
            title: self.title,
            credits: self.credits,
            instructor: self.instructor,
            semester,
            department: self.department,
            active: true,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_structures() -> Course {
        Course::builder("CS201", "Data Structures")
            .credits(4)
            .instructor("Dr. Knuth")
            .semester(Semester::Fall)
            .department("Computer Science")
            .build()
            .unwrap()
    }

    #[test]
    fn test_course_builder() {
        let course = data_structures();

        assert_eq!(course.code().as_str(), "CS201");
        assert_eq!(course.title(), "Data Structures");
        assert_eq!(course.credits(), 4);
        assert_eq!(course.instructor(), "Dr. Knuth");
        assert_eq!(course.semester(), Semester::Fall);
        assert_eq!(course.department(), "Computer Science");
        assert!(course.is_active());
    }

    #[test]
    fn test_optional_fields_default_empty() {
        let course = Course::builder("MA101", "Calculus")
            .credits(3)
            .semester(Semester::Spring)
            .build()
            .unwrap();

        assert!(course.instructor().is_empty());
        assert!(course.department().is_empty());
    }

    #[test]
    fn test_builder_rejects_missing_fields() {
        assert!(Course::builder("  ", "Title")
            .credits(3)
            .semester(Semester::Fall)
            .build()
            .is_err());
        assert!(Course::builder("CS1", "")
            .credits(3)
            .semester(Semester::Fall)
            .build()
            .is_err());
        assert!(Course::builder("CS1", "Title")
            .semester(Semester::Fall)
            .build()
            .is_err());
        assert!(Course::builder("CS1", "Title").credits(3).build().is_err());
    }

    #[test]
    fn test_code_equality_is_exact_matching_is_not() {
        let upper = CourseCode::new("CS201").unwrap();
        let lower = CourseCode::new("cs201").unwrap();

        assert_ne!(upper, lower);
        assert!(upper.matches("cs201"));
    }

    #[test]
    fn test_set_active() {
        let mut course = data_structures();
        course.set_active(false);
        assert!(!course.is_active());
    }
}
