//! Student command handlers

use super::Session;
use crate::args::{StudentOrder, StudentSubcommand};
use campus_records::core::models::{Profile, Student, StudentStatus};
use campus_records::core::validators;
use campus_records::core::{RecordsError, Result};
use campus_records::info;

/// Dispatch student subcommands
///
/// # Errors
/// Returns an error if a student does not resolve, input is invalid, or saving fails
pub fn run(subcommand: StudentSubcommand, session: &mut Session) -> Result<()> {
    match subcommand {
        StudentSubcommand::Add { name, email } => {
            let student = session.students.register(&name, &email)?;
            println!(
                "✓ Registered {} ({})",
                student.reg_no(),
                student.full_name()
            );
            session.save()?;
        }
        StudentSubcommand::List { sort } => list(session, sort),
        StudentSubcommand::Show { reg_no } => show(session, &reg_no)?,
        StudentSubcommand::Update {
            reg_no,
            name,
            email,
            status,
        } => {
            update(session, &reg_no, name, email, status)?;
            session.save()?;
        }
        StudentSubcommand::Deactivate { reg_no } => {
            update(session, &reg_no, None, None, Some(StudentStatus::Inactive))?;
            session.save()?;
        }
    }
    Ok(())
}

fn list(session: &Session, sort: StudentOrder) {
    let students: Vec<Student> = match sort {
        StudentOrder::Registered => session.students.all(),
        StudentOrder::Name => session.students.sorted_by_name(),
    };

    if students.is_empty() {
        println!("No students registered.");
        return;
    }
    println!(
        "{:<8} | {:<25} | {:<30} | Status",
        "RegNo", "Name", "Email"
    );
    for student in &students {
        println!("{student}");
    }
}

fn show(session: &Session, reg_no: &str) -> Result<()> {
    let student = session
        .students
        .find_by_reg_no(reg_no)
        .ok_or_else(|| RecordsError::student_not_found(reg_no))?;

    println!("{}", student.details());
    if student.enrollments().is_empty() {
        println!("  Enrollments: none");
    } else {
        println!("  Enrollments:");
        for enrollment in student.enrollments() {
            println!("    {enrollment}");
        }
    }
    Ok(())
}

fn update(
    session: &mut Session,
    reg_no: &str,
    name: Option<String>,
    email: Option<String>,
    status: Option<StudentStatus>,
) -> Result<()> {
    if name.as_deref().is_some_and(|n| !validators::is_not_blank(n)) {
        return Err(RecordsError::InvalidStudent(
            "full name cannot be empty".to_string(),
        ));
    }
    if let Some(email) = email.as_deref().filter(|e| !validators::is_valid_email(e)) {
        return Err(RecordsError::InvalidStudent(format!(
            "invalid email address '{email}'"
        )));
    }

    let student = session
        .students
        .find_by_reg_no_mut(reg_no)
        .ok_or_else(|| RecordsError::student_not_found(reg_no))?;

    if let Some(name) = name {
        student.set_full_name(name.trim().to_string());
    }
    if let Some(email) = email {
        student.set_email(email.trim().to_string());
    }
    if let Some(status) = status {
        student.set_status(status);
    }

    info!("Updated student {}", student.reg_no());
    println!("✓ Updated {}", student.reg_no());
    Ok(())
}
