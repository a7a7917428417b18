//! CLI command handlers for `CampusRecords`.
//!
//! This module provides handlers for the CLI subcommands.
//! Each command group is implemented in its own submodule.

pub mod config;
pub mod course;
pub mod data;
pub mod enrollment;
pub mod report;
pub mod student;

use campus_records::config::Config;
use campus_records::core::storage::{DataFiles, TransferSummary};
use campus_records::core::{CourseCatalog, EnrollmentService, Result, StudentDirectory};
use campus_records::debug;

/// Records loaded from the configured data directory for one CLI run
pub struct Session {
    /// Every student with their enrollments
    pub students: StudentDirectory,
    /// Every course
    pub courses: CourseCatalog,
    /// Enrollment rules built from the configured credit cap
    pub engine: EnrollmentService,
    files: DataFiles,
}

impl Session {
    /// Load the data directory, starting empty when it holds no data yet
    ///
    /// A directory holding only one of the student and course files is refused, so
    /// [`Session::save`] never overwrites records it did not load.
    ///
    /// # Errors
    /// Returns an error if existing data files cannot be read or parsed
    pub fn open(config: &Config) -> Result<Self> {
        let files = DataFiles::from_config(config);
        let mut students = StudentDirectory::new();
        let mut courses = CourseCatalog::new();

        if files.load(&mut students, &mut courses)?.is_none() {
            debug!(
                "No data at {}, starting with empty records",
                config.data_path().display()
            );
        }

        Ok(Self {
            students,
            courses,
            engine: EnrollmentService::new(config.records.max_credits_per_semester),
            files,
        })
    }

    /// Write every record back to the data directory
    ///
    /// # Errors
    /// Returns an error if the files cannot be written
    pub fn save(&self) -> Result<TransferSummary> {
        self.files.export(&self.students, &self.courses)
    }

    /// The live data files
    pub const fn files(&self) -> &DataFiles {
        &self.files
    }
}
