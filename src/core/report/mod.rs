//! Report generation module for academic statistics
//!
//! Turns the read-only views of [`TranscriptService`] into labelled tables that can be
//! rendered as plain text for the terminal or as Markdown documents.

pub mod formats;

use crate::core::error::Result;
use crate::core::TranscriptService;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub use formats::{MarkdownReporter, ReportFormat, TextReporter};

/// Which academic report to produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    /// GPA of every student, by name
    GpaDistribution,
    /// The best `n` students by GPA
    TopStudents(usize),
    /// Enrollment count per course
    EnrollmentStats,
}

impl ReportKind {
    /// Parse a report name, using `n` for the top-students report
    ///
    /// # Errors
    /// Returns an error message for unknown report names
    pub fn parse(name: &str, n: usize) -> std::result::Result<Self, String> {
        match name.trim().to_lowercase().as_str() {
            "gpa" | "distribution" => Ok(Self::GpaDistribution),
            "top" | "top-n" => Ok(Self::TopStudents(n)),
            "enrollments" | "stats" => Ok(Self::EnrollmentStats),
            _ => Err(format!(
                "Unknown report '{name}': expected gpa, top, or enrollments"
            )),
        }
    }

    /// Heading shown above the table
    #[must_use]
    pub fn title(&self) -> String {
        match self {
            Self::GpaDistribution => "GPA Distribution".to_string(),
            Self::TopStudents(n) => format!("Top {n} Students by GPA"),
            Self::EnrollmentStats => "Course Enrollment Statistics".to_string(),
        }
    }

    /// Column headings for the label and value columns
    #[must_use]
    pub const fn columns(&self) -> (&'static str, &'static str) {
        match self {
            Self::GpaDistribution | Self::TopStudents(_) => ("Student", "GPA"),
            Self::EnrollmentStats => ("Course", "Students"),
        }
    }
}

impl FromStr for ReportKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s, DEFAULT_TOP_N)
    }
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GpaDistribution => write!(f, "gpa"),
            Self::TopStudents(_) => write!(f, "top"),
            Self::EnrollmentStats => write!(f, "enrollments"),
        }
    }
}

/// Number of students in a top-students report when none is given
pub const DEFAULT_TOP_N: usize = 5;

/// One table row, already formatted for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Student name or course title
    pub label: String,
    /// GPA with two decimals, or an enrollment count
    pub value: String,
}

/// A report ready to render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    /// Report kind
    pub kind: ReportKind,
    /// Table rows in display order
    pub rows: Vec<ReportRow>,
}

impl Report {
    /// Compute a report from the current records
    ///
    /// The GPA distribution is listed by name (ignoring case); the other reports keep
    /// the ranking order of the underlying view.
    #[must_use]
    pub fn build(service: &TranscriptService<'_>, kind: ReportKind) -> Self {
        let rows = match kind {
            ReportKind::GpaDistribution => {
                let mut entries: Vec<(String, f64)> =
                    service.gpa_distribution().into_iter().collect();
                entries.sort_by_key(|(name, _)| name.to_lowercase());
                gpa_rows(entries)
            }
            ReportKind::TopStudents(n) => gpa_rows(service.top_n(n)),
            ReportKind::EnrollmentStats => service
                .course_enrollment_stats()
                .into_iter()
                .map(|(title, count)| ReportRow {
                    label: title,
                    value: count.to_string(),
                })
                .collect(),
        };
        Self { kind, rows }
    }

    /// Render in the requested format
    ///
    /// # Errors
    /// Returns [`RecordsError::Render`](crate::core::RecordsError::Render) if the
    /// Markdown template fails
    pub fn render(&self, format: ReportFormat) -> Result<String> {
        match format {
            ReportFormat::Text => TextReporter::new().render(self),
            ReportFormat::Markdown => MarkdownReporter::new().render(self),
        }
    }

    /// Render and write to `path`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if rendering fails or the file cannot be written
    pub fn write_to(&self, format: ReportFormat, path: &Path) -> Result<()> {
        let content = self.render(format)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, content)?;
        Ok(())
    }
}

fn gpa_rows(entries: impl IntoIterator<Item = (String, f64)>) -> Vec<ReportRow> {
    entries
        .into_iter()
        .map(|(name, gpa)| ReportRow {
            label: name,
            value: format!("{gpa:.2}"),
        })
        .collect()
}

/// Trait for report renderers
pub trait ReportGenerator {
    /// Render a report as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, report: &Report) -> Result<String>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Grade, Semester};
    use crate::core::{CourseCatalog, EnrollmentService, StudentDirectory};

    fn records() -> (StudentDirectory, CourseCatalog) {
        let mut courses = CourseCatalog::new();
        courses.add(
            Course::builder("CS101", "Programming")
                .credits(3)
                .semester(Semester::Fall)
                .build()
                .unwrap(),
        );
        let mut students = StudentDirectory::new();
        students.register("zoe", "zoe@campus.edu").unwrap();
        students.register("Adam", "adam@campus.edu").unwrap();

        let engine = EnrollmentService::default();
        engine.enroll(&mut students, &courses, "STU001", "CS101").unwrap();
        engine
            .assign_grade(&mut students, "STU001", "CS101", Grade::A)
            .unwrap();
        (students, courses)
    }

    #[test]
    fn test_report_kind_parse() {
        assert_eq!(
            ReportKind::parse("TOP", 3).unwrap(),
            ReportKind::TopStudents(3)
        );
        assert_eq!(
            "gpa".parse::<ReportKind>().unwrap(),
            ReportKind::GpaDistribution
        );
        assert!("honors".parse::<ReportKind>().is_err());
    }

    #[test]
    fn test_distribution_rows_sorted_by_name() {
        let (students, courses) = records();
        let service = TranscriptService::new(&students, &courses);
        let report = Report::build(&service, ReportKind::GpaDistribution);

        let labels: Vec<&str> = report.rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Adam", "zoe"]);
        assert_eq!(report.rows[1].value, "9.00");
    }

    #[test]
    fn test_top_rows_follow_ranking() {
        let (students, courses) = records();
        let service = TranscriptService::new(&students, &courses);
        let report = Report::build(&service, ReportKind::TopStudents(1));

        assert_eq!(report.rows.len(), 1);
        assert_eq!(report.rows[0].label, "zoe");
    }

    #[test]
    fn test_write_to_creates_directories() {
        let (students, courses) = records();
        let service = TranscriptService::new(&students, &courses);
        let report = Report::build(&service, ReportKind::EnrollmentStats);

        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("reports").join("stats.md");
        report.write_to(ReportFormat::Markdown, &path).unwrap();

        let written = fs::read_to_string(path).unwrap();
        assert!(written.contains("| Programming | 1 |"));
    }
}
