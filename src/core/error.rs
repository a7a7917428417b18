//! Error types for the records engine and its I/O collaborators

use crate::core::models::Semester;
use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias used throughout the core
pub type Result<T> = std::result::Result<T, RecordsError>;

/// The kind of record a failed lookup was aimed at
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// A student, looked up by registration number
    Student,
    /// A course, looked up by course code
    Course,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Student => write!(f, "Student"),
            Self::Course => write!(f, "Course"),
        }
    }
}

/// Errors raised by the records engine
#[derive(Error, Debug)]
pub enum RecordsError {
    /// A student or course lookup missed
    #[error("{kind} not found: {key}")]
    NotFound {
        /// What was being looked up
        kind: RecordKind,
        /// The registration number or course code that failed to resolve
        key: String,
    },

    /// The student already holds an enrollment for the course
    #[error("Student {reg_no} is already enrolled in course {course_code}")]
    DuplicateEnrollment {
        /// Student registration number
        reg_no: String,
        /// Course code
        course_code: String,
    },

    /// Enrolling would push the student's semester load over the cap
    #[error(
        "Enrollment failed: exceeds max credit limit of {limit} for the {semester} semester \
         ({current} enrolled + {requested} requested)"
    )]
    CreditLimitExceeded {
        /// Configured per-semester maximum
        limit: u32,
        /// Credits already held in the semester
        current: u32,
        /// Credits of the course being added
        requested: u32,
        /// Semester the limit applies to
        semester: Semester,
    },

    /// Grade assignment targeted a course the student is not enrolled in
    #[error("Student {reg_no} is not enrolled in course {course_code}")]
    NotEnrolled {
        /// Student registration number
        reg_no: String,
        /// Course code
        course_code: String,
    },

    /// Course construction rejected the supplied fields
    #[error("Invalid course: {0}")]
    InvalidCourse(String),

    /// Student construction or update rejected the supplied fields
    #[error("Invalid student: {0}")]
    InvalidStudent(String),

    /// A persisted record could not be decoded
    #[error("{}:{line}: {reason}", file.display())]
    Parse {
        /// File being read
        file: PathBuf,
        /// 1-based line number
        line: usize,
        /// What was wrong with the row
        reason: String,
    },

    /// The data directory holds only part of its record files
    #[error("Incomplete data directory: {} is missing", missing.display())]
    IncompleteData {
        /// The record file that could not be found
        missing: PathBuf,
    },

    /// Filesystem failure in import, export or backup
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A report template failed to render
    #[error("Report rendering failed: {0}")]
    Render(#[from] askama::Error),
}

impl RecordsError {
    /// Lookup miss for a registration number
    #[must_use]
    pub fn student_not_found(reg_no: &str) -> Self {
        Self::NotFound {
            kind: RecordKind::Student,
            key: reg_no.to_string(),
        }
    }

    /// Lookup miss for a course code
    #[must_use]
    pub fn course_not_found(code: &str) -> Self {
        Self::NotFound {
            kind: RecordKind::Course,
            key: code.to_string(),
        }
    }
}
