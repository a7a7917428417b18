//! Enrollment, grading and transcript command handlers

use super::Session;
use campus_records::core::models::Grade;
use campus_records::core::{Result, TranscriptService};
use campus_records::info;
use std::fs;
use std::path::Path;

/// Enroll a student and save
///
/// # Errors
/// Returns the engine's rejection (not found, duplicate, credit limit) or a save failure
pub fn enroll(session: &mut Session, reg_no: &str, code: &str) -> Result<()> {
    session
        .engine
        .enroll(&mut session.students, &session.courses, reg_no, code)?;
    session.save()?;
    println!("✓ Enrolled {reg_no} in {code}");
    Ok(())
}

/// Record a grade and save
///
/// # Errors
/// Returns an error if the student does not resolve, holds no such enrollment, or saving fails
pub fn grade(session: &mut Session, reg_no: &str, code: &str, grade: Grade) -> Result<()> {
    session
        .engine
        .assign_grade(&mut session.students, reg_no, code, grade)?;
    session.save()?;
    println!("✓ Recorded grade {grade} for {reg_no} in {code}");
    Ok(())
}

/// Print or write a student's transcript
///
/// # Errors
/// Returns an error if the student does not resolve or the output cannot be written
pub fn transcript(session: &Session, reg_no: &str, output: Option<&Path>) -> Result<()> {
    let text = TranscriptService::new(&session.students, &session.courses).transcript(reg_no)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, text)?;
            info!("Transcript for {reg_no} written to {}", path.display());
            println!("✓ Transcript written: {}", path.display());
        }
        None => print!("{text}"),
    }
    Ok(())
}
