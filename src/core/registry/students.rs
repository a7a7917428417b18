//! Student directory

use super::{IdGenerator, Searchable};
use crate::core::error::{RecordsError, Result};
use crate::core::models::{Student, StudentStatus};
use crate::core::validators;
use crate::debug;

/// Owns every student record, in insertion order
#[derive(Debug, Default)]
pub struct StudentDirectory {
    students: Vec<Student>,
    ids: IdGenerator,
}

impl StudentDirectory {
    /// Empty directory with a fresh id generator
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty directory drawing identities from `ids`
    #[must_use]
    pub fn with_generator(ids: IdGenerator) -> Self {
        Self {
            students: Vec::new(),
            ids,
        }
    }

    /// Create and insert a new ACTIVE student with generated id and registration number
    ///
    /// # Errors
    /// Returns [`RecordsError::InvalidStudent`] if the name is blank or the email is malformed
    pub fn register(&mut self, full_name: &str, email: &str) -> Result<&Student> {
        if !validators::is_not_blank(full_name) {
            return Err(RecordsError::InvalidStudent(
                "full name cannot be empty".to_string(),
            ));
        }
        if !validators::is_valid_email(email) {
            return Err(RecordsError::InvalidStudent(format!(
                "invalid email address '{email}'"
            )));
        }

        let student = Student::new(
            self.ids.next_id(),
            self.ids.next_reg_no(),
            full_name.trim().to_string(),
            email.trim().to_string(),
            StudentStatus::Active,
        );
        debug!("Registered student {} ({})", student.reg_no(), student.full_name());
        self.students.push(student);
        Ok(&self.students[self.students.len() - 1])
    }

    /// Build a student with an existing registration number and a fresh numeric id.
    /// The student is not inserted; pass it to [`add`](Self::add) or [`replace_all`](Self::replace_all).
    #[must_use]
    pub fn admit(
        &self,
        reg_no: String,
        full_name: String,
        email: String,
        status: StudentStatus,
    ) -> Student {
        Student::new(self.ids.next_id(), reg_no, full_name, email, status)
    }

    /// Insert a student as-is
    pub fn add(&mut self, student: Student) {
        self.ids.advance_past(student.reg_no());
        self.students.push(student);
    }

    /// First student whose registration number matches, ignoring case
    #[must_use]
    pub fn find_by_reg_no(&self, reg_no: &str) -> Option<&Student> {
        self.students.iter().find(|s| s.has_reg_no(reg_no))
    }

    /// Mutable access to the first matching student
    pub fn find_by_reg_no_mut(&mut self, reg_no: &str) -> Option<&mut Student> {
        self.students.iter_mut().find(|s| s.has_reg_no(reg_no))
    }

    /// Owned snapshot of every student
    #[must_use]
    pub fn all(&self) -> Vec<Student> {
        self.students.clone()
    }

    /// Borrowing iterator in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Student> {
        self.students.iter()
    }

    /// Number of students
    #[must_use]
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the directory is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// Drop every student and load `students` in their given order
    pub fn replace_all(&mut self, students: Vec<Student>) {
        for student in &students {
            self.ids.advance_past(student.reg_no());
        }
        self.students = students;
    }

    /// Snapshot sorted by full name, ignoring case
    #[must_use]
    pub fn sorted_by_name(&self) -> Vec<Student> {
        let mut students = self.all();
        students.sort_by_key(|s| s.full_name().to_lowercase());
        students
    }
}

impl Searchable<Student> for StudentDirectory {
    fn search<P>(&self, predicate: P) -> Vec<Student>
    where
        P: Fn(&Student) -> bool,
    {
        self.students
            .iter()
            .filter(|s| predicate(s))
            .cloned()
            .collect()
    }
}
