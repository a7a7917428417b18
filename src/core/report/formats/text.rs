//! Plain-text report renderer

use crate::core::error::Result;
use crate::core::report::{Report, ReportGenerator, ReportKind};
use std::fmt::Write;

/// Renders reports as aligned terminal text
#[derive(Debug, Default)]
pub struct TextReporter;

impl TextReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl ReportGenerator for TextReporter {
    fn render(&self, report: &Report) -> Result<String> {
        let mut out = String::new();
        let _ = writeln!(out, "--- {} ---", report.kind.title());

        if report.rows.is_empty() {
            let _ = writeln!(out, "  (no data)");
        }
        for row in &report.rows {
            let _ = match report.kind {
                ReportKind::EnrollmentStats => {
                    writeln!(out, "  {:<30} | {} student(s)", row.label, row.value)
                }
                _ => writeln!(out, "  {:<20} | {}", row.label, row.value),
            };
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::report::ReportRow;

    #[test]
    fn test_enrollment_rows_have_unit() {
        let report = Report {
            kind: ReportKind::EnrollmentStats,
            rows: vec![ReportRow {
                label: "Calculus".to_string(),
                value: "2".to_string(),
            }],
        };
        let text = TextReporter::new().render(&report).unwrap();
        assert!(text.starts_with("--- Course Enrollment Statistics ---"));
        assert!(text.contains("Calculus"));
        assert!(text.trim_end().ends_with("| 2 student(s)"));
    }

    #[test]
    fn test_empty_report() {
        let report = Report {
            kind: ReportKind::TopStudents(3),
            rows: Vec::new(),
        };
        let text = TextReporter::new().render(&report).unwrap();
        assert!(text.contains("Top 3 Students by GPA"));
        assert!(text.contains("(no data)"));
    }
}
