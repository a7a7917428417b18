//! Report command handler
//!
//! Renders GPA and enrollment reports as text or Markdown.

use super::Session;
use campus_records::core::report::{Report, ReportFormat, ReportKind};
use campus_records::core::{Result, TranscriptService};
use campus_records::info;
use std::path::Path;

/// Run the report command
///
/// # Errors
/// Returns an error if the Markdown template fails or the output cannot be written
pub fn run(
    session: &Session,
    kind: ReportKind,
    format: ReportFormat,
    output: Option<&Path>,
) -> Result<()> {
    let service = TranscriptService::new(&session.students, &session.courses);
    let report = Report::build(&service, kind);

    match output {
        Some(path) => {
            report.write_to(format, path)?;
            info!("{kind} report written to {}", path.display());
            println!("✓ Report generated: {}", path.display());
        }
        None => print!("{}", report.render(format)?),
    }
    Ok(())
}
