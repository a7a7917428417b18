//! Markdown report generator
//!
//! Renders reports through the `records_report.md` template. The output reads well in
//! GitHub, GitLab and VS Code.

use crate::core::error::Result;
use crate::core::report::{Report, ReportGenerator, ReportRow};
use crate::shared::APP_NAME;
use askama::Template;
use chrono::Local;

/// Template context for a Markdown report
#[derive(Template)]
#[template(path = "records_report.md", escape = "none")]
struct RecordsReportTemplate {
    title: String,
    generated: String,
    app: &'static str,
    label_header: &'static str,
    value_header: &'static str,
    rows: Vec<ReportRow>,
}

/// Markdown report generator
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Keep table cells from splitting on a literal pipe
fn escape_cell(value: &str) -> String {
    value.replace('|', "\\|")
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, report: &Report) -> Result<String> {
        let rows: Vec<ReportRow> = report
            .rows
            .iter()
            .map(|row| ReportRow {
                label: escape_cell(&row.label),
                value: escape_cell(&row.value),
            })
            .collect();
        let (label_header, value_header) = report.kind.columns();

        let template = RecordsReportTemplate {
            title: report.kind.title(),
            generated: Local::now().format("%Y-%m-%d %H:%M").to_string(),
            app: APP_NAME,
            label_header,
            value_header,
            rows,
        };
        Ok(template.render()?)
    }
}
