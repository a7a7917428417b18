//! Course command handlers

use super::Session;
use crate::args::{CourseOrder, CourseSubcommand};
use campus_records::core::models::{Course, Semester};
use campus_records::core::{CourseCatalog, RecordsError, Result};
use campus_records::info;

/// Dispatch course subcommands
///
/// # Errors
/// Returns an error if a course is invalid, already exists, does not resolve, or saving fails
pub fn run(subcommand: CourseSubcommand, session: &mut Session) -> Result<()> {
    match subcommand {
        CourseSubcommand::Add {
            code,
            title,
            credits,
            semester,
            instructor,
            department,
        } => {
            if session.courses.find_by_code(&code).is_some() {
                return Err(RecordsError::InvalidCourse(format!(
                    "course {code} already exists"
                )));
            }
            let course = Course::builder(code, title)
                .credits(credits)
                .semester(semester)
                .instructor(instructor)
                .department(department)
                .build()?;

            info!("Added course {}", course.code());
            println!("✓ Added {} ({})", course.code(), course.title());
            session.courses.add(course);
            session.save()?;
        }
        CourseSubcommand::List {
            instructor,
            department,
            semester,
            sort,
        } => list(
            &session.courses,
            instructor.as_deref(),
            department.as_deref(),
            semester,
            sort,
        ),
        CourseSubcommand::Deactivate { code } => set_active(session, &code, false)?,
        CourseSubcommand::Activate { code } => set_active(session, &code, true)?,
    }
    Ok(())
}

fn set_active(session: &mut Session, code: &str, active: bool) -> Result<()> {
    session.courses.set_active(code, active)?;
    let state = if active { "Activated" } else { "Deactivated" };
    info!("{state} course {code}");
    println!("✓ {state} {code}");
    session.save()?;
    Ok(())
}

/// Print the catalog narrowed by every given filter
fn list(
    catalog: &CourseCatalog,
    instructor: Option<&str>,
    department: Option<&str>,
    semester: Option<Semester>,
    sort: CourseOrder,
) {
    let mut courses = match (instructor, department, semester) {
        (Some(i), _, _) => catalog.by_instructor(i),
        (None, Some(d), _) => catalog.by_department(d),
        (None, None, Some(s)) => catalog.by_semester(s),
        (None, None, None) => catalog.all(),
    };
    courses.retain(|c| {
        department.map_or(true, |d| c.department().eq_ignore_ascii_case(d))
            && semester.map_or(true, |s| c.semester() == s)
    });

    let mut view = CourseCatalog::new();
    view.replace_all(courses);
    let courses = match sort {
        CourseOrder::Catalog => view.all(),
        CourseOrder::Title => view.sorted_by_title(),
        CourseOrder::Department => view.sorted_by_department(),
    };

    if courses.is_empty() {
        println!("No courses found.");
        return;
    }
    println!(
        "{:<10} | {:<30} | {:<2} | {:<20} | {:<10} | {:<20}",
        "Code", "Title", "Cr", "Instructor", "Semester", "Department"
    );
    for course in &courses {
        if course.is_active() {
            println!("{course}");
        } else {
            println!("{course} (inactive)");
        }
    }
}
