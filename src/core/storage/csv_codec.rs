//! CSV codec for students, courses and enrollments
//!
//! Every file starts with a header row. Columns are located by header name (ignoring
//! case), so extra columns are tolerated and order may vary. Fields containing commas
//! or quotes are written double-quoted.

use crate::core::error::{RecordsError, Result};
use crate::core::models::{Course, CourseCode, Enrollment, Grade, Semester, Student, StudentStatus};
use crate::core::registry::StudentDirectory;
use chrono::{DateTime, Local, NaiveDateTime};
use std::path::Path;

/// Student file columns
pub const STUDENT_HEADER: [&str; 4] = ["regNo", "fullName", "email", "status"];

/// Course file columns
pub const COURSE_HEADER: [&str; 6] = [
    "code",
    "title",
    "credits",
    "instructor",
    "semester",
    "department",
];

/// Enrollment file columns
pub const ENROLLMENT_HEADER: [&str; 4] = ["regNo", "courseCode", "grade", "enrolledAt"];

/// Column positions resolved from a header row
struct Header {
    indices: Vec<usize>,
}

impl Header {
    fn resolve(line: &str, expected: &[&str], file: &Path, line_no: usize) -> Result<Self> {
        let columns = parse_csv_line(line);
        let indices = expected
            .iter()
            .map(|name| {
                columns
                    .iter()
                    .position(|c| c.eq_ignore_ascii_case(name))
                    .ok_or_else(|| parse_error(file, line_no, format!("missing column '{name}'")))
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { indices })
    }

    /// Pick the expected columns out of a row, in header order
    fn pick<'a>(&self, fields: &'a [String], file: &Path, line_no: usize) -> Result<Vec<&'a str>> {
        self.indices
            .iter()
            .map(|&i| {
                fields.get(i).map(String::as_str).ok_or_else(|| {
                    parse_error(
                        file,
                        line_no,
                        format!("expected at least {} fields, found {}", i + 1, fields.len()),
                    )
                })
            })
            .collect()
    }
}

fn parse_error(file: &Path, line: usize, reason: impl Into<String>) -> RecordsError {
    RecordsError::Parse {
        file: file.to_path_buf(),
        line,
        reason: reason.into(),
    }
}

/// Split `content` into (1-based line number, line), skipping blank lines
fn records(content: &str) -> impl Iterator<Item = (usize, &str)> {
    content
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .filter(|(_, line)| !line.trim().is_empty())
}

/// Run `parse_row` over every data row after validating the header
fn parse_rows<T>(
    content: &str,
    file: &Path,
    expected: &[&str],
    mut parse_row: impl FnMut(&[&str], usize) -> Result<T>,
) -> Result<Vec<T>> {
    let mut lines = records(content);
    let (header_no, header_line) = lines
        .next()
        .ok_or_else(|| parse_error(file, 1, "missing header row"))?;
    let header = Header::resolve(header_line, expected, file, header_no)?;

    lines
        .map(|(line_no, line)| {
            let fields = parse_csv_line(line);
            let picked = header.pick(&fields, file, line_no)?;
            parse_row(&picked, line_no)
        })
        .collect()
}

/// Split one CSV line into trimmed fields, honoring double quotes
fn parse_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_string());
                current.clear();
            }
            _ => current.push(c),
        }
    }
    fields.push(current.trim().to_string());
    fields
}

/// Quote a field if it would otherwise break the row
fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn write_row(out: &mut String, fields: &[&str]) {
    let row: Vec<String> = fields.iter().map(|f| escape(f)).collect();
    out.push_str(&row.join(","));
    out.push('\n');
}

/// Parse a student file
///
/// Numeric ids are drawn from `directory`; registration numbers are kept as written.
///
/// # Errors
/// Returns [`RecordsError::Parse`] for a missing header, short rows, blank registration
/// numbers or an unknown status
pub fn parse_students(
    content: &str,
    file: &Path,
    directory: &StudentDirectory,
) -> Result<Vec<Student>> {
    parse_rows(content, file, &STUDENT_HEADER, |fields, line_no| {
        let [reg_no, full_name, email, status] = [fields[0], fields[1], fields[2], fields[3]];
        if reg_no.is_empty() {
            return Err(parse_error(file, line_no, "empty registration number"));
        }
        let status = status
            .parse::<StudentStatus>()
            .map_err(|e| parse_error(file, line_no, e))?;
        Ok(directory.admit(
            reg_no.to_string(),
            full_name.to_string(),
            email.to_string(),
            status,
        ))
    })
}

/// Parse a course file
///
/// # Errors
/// Returns [`RecordsError::Parse`] for a missing header, short rows, non-numeric
/// credits, an unknown semester or a course the builder rejects
pub fn parse_courses(content: &str, file: &Path) -> Result<Vec<Course>> {
    parse_rows(content, file, &COURSE_HEADER, |fields, line_no| {
        let credits = fields[2].parse::<u32>().map_err(|_| {
            parse_error(file, line_no, format!("invalid credits '{}'", fields[2]))
        })?;
        let semester = fields[4]
            .parse::<Semester>()
            .map_err(|e| parse_error(file, line_no, e))?;

        Course::builder(fields[0], fields[1])
            .credits(credits)
            .instructor(fields[3])
            .semester(semester)
            .department(fields[5])
            .build()
            .map_err(|e| parse_error(file, line_no, e.to_string()))
    })
}

/// Parse an enrollment file. An empty grade column means not graded.
///
/// # Errors
/// Returns [`RecordsError::Parse`] for a missing header, short rows, an unknown grade
/// or a timestamp that is not RFC 3339
pub fn parse_enrollments(content: &str, file: &Path) -> Result<Vec<Enrollment>> {
    parse_rows(content, file, &ENROLLMENT_HEADER, |fields, line_no| {
        let code = CourseCode::new(fields[1]).map_err(|e| parse_error(file, line_no, e.to_string()))?;
        let grade = if fields[2].is_empty() {
            None
        } else {
            Some(
                fields[2]
                    .parse::<Grade>()
                    .map_err(|e| parse_error(file, line_no, e))?,
            )
        };
        let enrolled_at = parse_timestamp(fields[3])
            .ok_or_else(|| parse_error(file, line_no, format!("invalid timestamp '{}'", fields[3])))?;

        Ok(Enrollment::restore(fields[0].to_string(), code, grade, enrolled_at))
    })
}

fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|t| t.naive_local())
}

fn format_timestamp(at: NaiveDateTime) -> String {
    at.and_local_timezone(Local)
        .earliest()
        .map_or_else(|| at.and_utc().to_rfc3339(), |t| t.to_rfc3339())
}

/// Serialize students with a header row
#[must_use]
pub fn write_students<'a>(students: impl IntoIterator<Item = &'a Student>) -> String {
    let mut out = String::new();
    write_row(&mut out, &STUDENT_HEADER);
    for student in students {
        write_row(
            &mut out,
            &[
                student.reg_no(),
                student.full_name(),
                student.email(),
                student.status().as_str(),
            ],
        );
    }
    out
}

/// Serialize courses with a header row
#[must_use]
pub fn write_courses<'a>(courses: impl IntoIterator<Item = &'a Course>) -> String {
    let mut out = String::new();
    write_row(&mut out, &COURSE_HEADER);
    for course in courses {
        let credits = course.credits().to_string();
        write_row(
            &mut out,
            &[
                course.code().as_str(),
                course.title(),
                &credits,
                course.instructor(),
                course.semester().as_str(),
                course.department(),
            ],
        );
    }
    out
}

/// Serialize every student's enrollments, in directory then enrollment order
#[must_use]
pub fn write_enrollments<'a>(students: impl IntoIterator<Item = &'a Student>) -> String {
    let mut out = String::new();
    write_row(&mut out, &ENROLLMENT_HEADER);
    for enrollment in students.into_iter().flat_map(Student::enrollments) {
        let enrolled_at = format_timestamp(enrollment.enrolled_at());
        write_row(
            &mut out,
            &[
                enrollment.student_reg_no(),
                enrollment.course_code().as_str(),
                enrollment.grade().map_or("", Grade::letter),
                &enrolled_at,
            ],
        );
    }
    out
}
