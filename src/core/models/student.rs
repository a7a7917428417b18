//! Student model

use super::{Enrollment, Person, Profile};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum StudentStatus {
    /// Currently studying
    Active,
    /// Deactivated (suspended, withdrawn, ...)
    Inactive,
    /// Completed their program
    Graduated,
}

impl StudentStatus {
    /// Upper-case name as persisted in CSV files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
            Self::Graduated => "GRADUATED",
        }
    }
}

impl FromStr for StudentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "ACTIVE" => Ok(Self::Active),
            "INACTIVE" => Ok(Self::Inactive),
            "GRADUATED" => Ok(Self::Graduated),
            _ => Err(format!(
                "Invalid status '{s}': expected ACTIVE, INACTIVE, or GRADUATED"
            )),
        }
    }
}

impl fmt::Display for StudentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A student and the enrollments they own, in enrollment order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    person: Person,
    reg_no: String,
    status: StudentStatus,
    enrollments: Vec<Enrollment>,
}

impl Student {
    /// Create a student with no enrollments
    ///
    /// # Arguments
    /// * `id` - Numeric identity, normally drawn from an [`IdGenerator`](crate::core::IdGenerator)
    /// * `reg_no` - Registration number (e.g., "STU001")
    /// * `full_name` - Full name
    /// * `email` - Email address
    /// * `status` - Initial lifecycle status
    #[must_use]
    pub fn new(
        id: u64,
        reg_no: String,
        full_name: String,
        email: String,
        status: StudentStatus,
    ) -> Self {
        Self {
            person: Person::new(id, full_name, email),
            reg_no,
            status,
            enrollments: Vec::new(),
        }
    }

    /// Numeric identity
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.person.id()
    }

    /// Registration number
    #[must_use]
    pub fn reg_no(&self) -> &str {
        &self.reg_no
    }

    /// Full name
    #[must_use]
    pub fn full_name(&self) -> &str {
        self.person.full_name()
    }

    /// Email address
    #[must_use]
    pub fn email(&self) -> &str {
        self.person.email()
    }

    /// Lifecycle status
    #[must_use]
    pub const fn status(&self) -> StudentStatus {
        self.status
    }

    /// Shared person fields (timestamps included)
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// Enrollments in the order they were made
    #[must_use]
    pub fn enrollments(&self) -> &[Enrollment] {
        &self.enrollments
    }

    /// Whether the registration number matches, ignoring ASCII case
    #[must_use]
    pub fn has_reg_no(&self, reg_no: &str) -> bool {
        self.reg_no.eq_ignore_ascii_case(reg_no)
    }

    /// Replace the full name
    pub fn set_full_name(&mut self, full_name: String) {
        self.person.set_full_name(full_name);
    }

    /// Replace the email address
    pub fn set_email(&mut self, email: String) {
        self.person.set_email(email);
    }

    /// Change the lifecycle status
    pub fn set_status(&mut self, status: StudentStatus) {
        self.status = status;
        self.person.touch();
    }

    /// Append an enrollment. Callers outside the core go through
    /// [`EnrollmentService::enroll`](crate::core::EnrollmentService::enroll).
    pub(crate) fn push_enrollment(&mut self, enrollment: Enrollment) {
        self.enrollments.push(enrollment);
    }

    pub(crate) fn enrollment_mut(&mut self, course_code: &str) -> Option<&mut Enrollment> {
        self.enrollments
            .iter_mut()
            .find(|e| e.course_code().matches(course_code))
    }
}

impl Profile for Student {
    fn details(&self) -> String {
        format!(
            "Student Profile:\n  RegNo: {}\n  Name: {}\n  Email: {}\n  Status: {}",
            self.reg_no,
            self.full_name(),
            self.email(),
            self.status
        )
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<8} | {:<25} | {:<30} | {}",
            self.reg_no,
            self.full_name(),
            self.email(),
            self.status
        )
    }
}
