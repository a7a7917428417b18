//! Import, export and backup command handlers

use super::Session;
use crate::args::{BackupSubcommand, DataSubcommand};
use campus_records::config::Config;
use campus_records::core::storage::{BackupService, DataFiles, TransferSummary};
use campus_records::core::Result;

/// Dispatch data subcommands
///
/// An import replaces every record and is written straight back to the data directory.
///
/// # Errors
/// Returns an error if a file cannot be read, parsed or written
pub fn run(subcommand: DataSubcommand, session: &mut Session) -> Result<()> {
    match subcommand {
        DataSubcommand::Import { from } => {
            let summary =
                DataFiles::in_dir(&from).import(&mut session.students, &mut session.courses)?;
            session.save()?;
            print_summary("Imported", &summary, &from.display().to_string());
            if summary.skipped > 0 {
                println!("  {} enrollment row(s) skipped", summary.skipped);
            }
        }
        DataSubcommand::Export { to } => {
            let summary = match &to {
                Some(dir) => DataFiles::in_dir(dir).export(&session.students, &session.courses)?,
                None => session.save()?,
            };
            let target = to.map_or_else(
                || {
                    session
                        .files()
                        .students
                        .parent()
                        .map(|p| p.display().to_string())
                        .unwrap_or_default()
                },
                |dir| dir.display().to_string(),
            );
            print_summary("Exported", &summary, &target);
        }
    }
    Ok(())
}

fn print_summary(action: &str, summary: &TransferSummary, location: &str) {
    println!(
        "✓ {action} {} students, {} courses, {} enrollments ({location})",
        summary.students, summary.courses, summary.enrollments
    );
}

/// Dispatch backup subcommands; creates a backup when none is given
///
/// # Errors
/// Returns an error if the backup folder cannot be written or read
pub fn backup(subcommand: Option<BackupSubcommand>, config: &Config) -> Result<()> {
    let service = BackupService::new(config.backup_path());

    match subcommand.unwrap_or(BackupSubcommand::Create) {
        BackupSubcommand::Create => {
            let report = service.create(&DataFiles::from_config(config))?;
            println!(
                "✓ Backed up {} file(s) to {}",
                report.files_copied,
                report.dir.display()
            );
        }
        BackupSubcommand::Size => {
            let size = service.total_size()?;
            #[allow(clippy::cast_precision_loss)]
            let megabytes = size as f64 / (1024.0 * 1024.0);
            println!("Total backup size: {size} bytes ({megabytes:.2} MB)");
        }
        BackupSubcommand::List => {
            let backups = service.list()?;
            if backups.is_empty() {
                println!("No backups in {}", service.root().display());
            }
            for dir in backups {
                println!("{}", dir.display());
            }
        }
    }
    Ok(())
}
