//! Course catalog

use super::Searchable;
use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, Semester};

/// Owns every course, in insertion order
#[derive(Debug, Default, Clone)]
pub struct CourseCatalog {
    courses: Vec<Course>,
}

impl CourseCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a course as-is
    pub fn add(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// First course whose code matches, ignoring case
    #[must_use]
    pub fn find_by_code(&self, code: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.code().matches(code))
    }

    /// Open or close a course
    ///
    /// # Errors
    /// Returns [`RecordsError::NotFound`] if no course has the code
    pub fn set_active(&mut self, code: &str, active: bool) -> Result<()> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.code().matches(code))
            .ok_or_else(|| RecordsError::course_not_found(code))?;
        course.set_active(active);
        Ok(())
    }

    /// Owned snapshot of every course
    #[must_use]
    pub fn all(&self) -> Vec<Course> {
        self.courses.clone()
    }

    /// Borrowing iterator in catalog order
    pub fn iter(&self) -> impl Iterator<Item = &Course> {
        self.courses.iter()
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Whether the catalog is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Drop every course and load `courses` in their given order
    pub fn replace_all(&mut self, courses: Vec<Course>) {
        self.courses = courses;
    }

    /// Courses taught by `instructor`, ignoring case
    #[must_use]
    pub fn by_instructor(&self, instructor: &str) -> Vec<Course> {
        self.search(|c| c.instructor().eq_ignore_ascii_case(instructor))
    }

    /// Courses owned by `department`, ignoring case
    #[must_use]
    pub fn by_department(&self, department: &str) -> Vec<Course> {
        self.search(|c| c.department().eq_ignore_ascii_case(department))
    }

    /// Courses running in `semester`
    #[must_use]
    pub fn by_semester(&self, semester: Semester) -> Vec<Course> {
        self.search(|c| c.semester() == semester)
    }

    /// Snapshot sorted by title, ignoring case
    #[must_use]
    pub fn sorted_by_title(&self) -> Vec<Course> {
        let mut courses = self.all();
        courses.sort_by_key(|c| c.title().to_lowercase());
        courses
    }

    /// Snapshot sorted by department, then title
    #[must_use]
    pub fn sorted_by_department(&self) -> Vec<Course> {
        let mut courses = self.all();
        courses.sort_by(|a, b| {
            a.department()
                .cmp(b.department())
                .then_with(|| a.title().cmp(b.title()))
        });
        courses
    }
}

impl Searchable<Course> for CourseCatalog {
    fn search<P>(&self, predicate: P) -> Vec<Course>
    where
        P: Fn(&Course) -> bool,
    {
        self.courses
            .iter()
            .filter(|c| predicate(c))
            .cloned()
            .collect()
    }
}
