//! Import and export of the data directory

use super::csv_codec;
use crate::core::config::{Config, PathsConfig};
use crate::core::error::Result;
use crate::core::error::RecordsError;
use crate::core::models::{Course, Enrollment, Student};
use crate::core::registry::{CourseCatalog, StudentDirectory};
use crate::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

/// Default student file name
pub const STUDENTS_FILE: &str = "students.csv";
/// Default course file name
pub const COURSES_FILE: &str = "courses.csv";
/// Default enrollment file name
pub const ENROLLMENTS_FILE: &str = "enrollments.csv";

/// The three data files of one data directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    /// Student records
    pub students: PathBuf,
    /// Course records
    pub courses: PathBuf,
    /// Enrollment records
    pub enrollments: PathBuf,
}

/// Record counts from an import or export
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransferSummary {
    /// Students read or written
    pub students: usize,
    /// Courses read or written
    pub courses: usize,
    /// Enrollments read or written
    pub enrollments: usize,
    /// Enrollment rows dropped during import
    pub skipped: usize,
}

fn name_or<'a>(name: &'a str, default: &'a str) -> &'a str {
    if name.is_empty() {
        default
    } else {
        name
    }
}

impl DataFiles {
    /// Files with the default names inside `dir`
    #[must_use]
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            students: dir.join(STUDENTS_FILE),
            courses: dir.join(COURSES_FILE),
            enrollments: dir.join(ENROLLMENTS_FILE),
        }
    }

    /// Files inside `dir` named as configured; empty names fall back to the defaults
    #[must_use]
    pub fn with_names(dir: &Path, paths: &PathsConfig) -> Self {
        Self {
            students: dir.join(name_or(&paths.students_file, STUDENTS_FILE)),
            courses: dir.join(name_or(&paths.courses_file, COURSES_FILE)),
            enrollments: dir.join(name_or(&paths.enrollments_file, ENROLLMENTS_FILE)),
        }
    }

    /// The configured live data files
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::with_names(&config.data_path(), &config.paths)
    }

    /// Load the live records, or leave both registries empty when no data exists yet
    ///
    /// Returns `None` when neither the student nor the course file exists.
    ///
    /// # Errors
    /// - [`RecordsError::IncompleteData`] if exactly one of the two files exists
    /// - any error from [`DataFiles::import`]
    pub fn load(
        &self,
        students: &mut StudentDirectory,
        courses: &mut CourseCatalog,
    ) -> Result<Option<TransferSummary>> {
        match (self.students.is_file(), self.courses.is_file()) {
            (true, true) => self.import(students, courses).map(Some),
            (false, false) => Ok(None),
            (true, false) => Err(RecordsError::IncompleteData {
                missing: self.courses.clone(),
            }),
            (false, true) => Err(RecordsError::IncompleteData {
                missing: self.students.clone(),
            }),
        }
    }

    /// All three paths
    #[must_use]
    pub fn paths(&self) -> [&Path; 3] {
        [&self.students, &self.courses, &self.enrollments]
    }

    /// Replace the directory and catalog contents with the files' records
    ///
    /// Every file is parsed before anything is replaced, so a failed import leaves both
    /// registries untouched. The enrollment file is optional. Enrollment rows naming an
    /// unknown student, or repeating a course the student already holds, are skipped
    /// with a warning.
    ///
    /// # Errors
    /// - [`RecordsError::Io`](crate::core::RecordsError::Io) if the student or course file
    ///   cannot be read
    /// - [`RecordsError::Parse`](crate::core::RecordsError::Parse) if any file is malformed
    pub fn import(
        &self,
        students: &mut StudentDirectory,
        courses: &mut CourseCatalog,
    ) -> Result<TransferSummary> {
        let mut loaded_students = csv_codec::parse_students(
            &fs::read_to_string(&self.students)?,
            &self.students,
            students,
        )?;
        let loaded_courses =
            csv_codec::parse_courses(&fs::read_to_string(&self.courses)?, &self.courses)?;

        let enrollments = if self.enrollments.is_file() {
            csv_codec::parse_enrollments(
                &fs::read_to_string(&self.enrollments)?,
                &self.enrollments,
            )?
        } else {
            debug!("No enrollment file at {}", self.enrollments.display());
            Vec::new()
        };

        let mut summary = TransferSummary {
            students: loaded_students.len(),
            courses: loaded_courses.len(),
            ..TransferSummary::default()
        };
        for enrollment in enrollments {
            if attach(&mut loaded_students, &loaded_courses, enrollment) {
                summary.enrollments += 1;
            } else {
                summary.skipped += 1;
            }
        }

        students.replace_all(loaded_students);
        courses.replace_all(loaded_courses);

        info!(
            "Imported {} students, {} courses, {} enrollments from {}",
            summary.students,
            summary.courses,
            summary.enrollments,
            self.students.parent().unwrap_or(Path::new(".")).display()
        );
        Ok(summary)
    }

    /// Write every record, overwriting the three files whole
    ///
    /// # Errors
    /// Returns [`RecordsError::Io`](crate::core::RecordsError::Io) if a directory cannot be
    /// created or a file cannot be written
    pub fn export(
        &self,
        students: &StudentDirectory,
        courses: &CourseCatalog,
    ) -> Result<TransferSummary> {
        for path in self.paths() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
        }

        fs::write(&self.students, csv_codec::write_students(students.iter()))?;
        fs::write(&self.courses, csv_codec::write_courses(courses.iter()))?;
        fs::write(
            &self.enrollments,
            csv_codec::write_enrollments(students.iter()),
        )?;

        let summary = TransferSummary {
            students: students.len(),
            courses: courses.len(),
            enrollments: students.iter().map(|s| s.enrollments().len()).sum(),
            skipped: 0,
        };
        info!(
            "Exported {} students, {} courses, {} enrollments to {}",
            summary.students,
            summary.courses,
            summary.enrollments,
            self.students.parent().unwrap_or(Path::new(".")).display()
        );
        Ok(summary)
    }
}

/// Hand a persisted enrollment to its owning student; false if it was dropped
fn attach(students: &mut [Student], courses: &[Course], enrollment: Enrollment) -> bool {
    let Some(student) = students
        .iter_mut()
        .find(|s| s.has_reg_no(enrollment.student_reg_no()))
    else {
        warn!(
            "Skipping enrollment of unknown student {} in {}",
            enrollment.student_reg_no(),
            enrollment.course_code()
        );
        return false;
    };

    if student
        .enrollments()
        .iter()
        .any(|e| e.course_code().matches(enrollment.course_code().as_str()))
    {
        warn!(
            "Skipping duplicate enrollment of {} in {}",
            student.reg_no(),
            enrollment.course_code()
        );
        return false;
    }

    let code = courses
        .iter()
        .find(|c| c.code().matches(enrollment.course_code().as_str()))
        .map_or_else(|| enrollment.course_code().clone(), |c| c.code().clone());
    let enrollment = Enrollment::restore(
        student.reg_no().to_string(),
        code,
        enrollment.grade(),
        enrollment.enrolled_at(),
    );
    student.push_enrollment(enrollment);
    true
}
