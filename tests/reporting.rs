//! Integration tests for GPA, rankings and rendered reports

use campus_records::core::models::{Course, Grade, Semester};
use campus_records::core::report::{Report, ReportFormat, ReportKind};
use campus_records::core::{CourseCatalog, EnrollmentService, StudentDirectory, TranscriptService};

fn catalog() -> CourseCatalog {
    let mut courses = CourseCatalog::new();
    for (code, title, credits) in [("CS101", "Programming", 3), ("MA101", "Calculus", 3)] {
        courses.add(
            Course::builder(code, title)
                .credits(credits)
                .semester(Semester::Fall)
                .build()
                .unwrap(),
        );
    }
    courses
}

/// Three students whose GPAs come out at 9.0, 7.5 and 8.0
fn ranked_students(courses: &CourseCatalog) -> StudentDirectory {
    let mut students = StudentDirectory::new();
    students.register("Ada", "ada@campus.edu").unwrap();
    students.register("Ben", "ben@campus.edu").unwrap();
    students.register("Cy", "cy@campus.edu").unwrap();

    let engine = EnrollmentService::default();
    let grades = [
        ("STU001", "CS101", Grade::A),
        ("STU002", "CS101", Grade::C),
        ("STU002", "MA101", Grade::B),
        ("STU003", "MA101", Grade::B),
    ];
    for (reg_no, code, grade) in grades {
        engine.enroll(&mut students, courses, reg_no, code).unwrap();
        engine
            .assign_grade(&mut students, reg_no, code, grade)
            .unwrap();
    }
    students
}

#[test]
fn top_n_orders_by_gpa() {
    let courses = catalog();
    let students = ranked_students(&courses);
    let service = TranscriptService::new(&students, &courses);

    let top = service.top_n(2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, "Ada");
    assert!((top[0].1 - 9.0).abs() < 1e-9);
    assert_eq!(top[1].0, "Cy");
    assert!((top[1].1 - 8.0).abs() < 1e-9);

    let all = service.top_n(10);
    let names: Vec<&str> = all.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, vec!["Ada", "Cy", "Ben"]);
    assert!((all[2].1 - 7.5).abs() < 1e-9);
}

#[test]
fn gpa_without_grades_is_zero() {
    let courses = catalog();
    let mut students = StudentDirectory::new();
    students.register("Dee", "dee@campus.edu").unwrap();
    EnrollmentService::default()
        .enroll(&mut students, &courses, "STU001", "CS101")
        .unwrap();

    let service = TranscriptService::new(&students, &courses);
    let gpa = service.gpa(students.find_by_reg_no("STU001").unwrap());
    assert!(gpa.abs() < f64::EPSILON);
}

#[test]
fn enrollment_stats_count_every_student() {
    let courses = catalog();
    let students = ranked_students(&courses);
    let service = TranscriptService::new(&students, &courses);

    let stats = service.course_enrollment_stats();
    assert_eq!(
        stats,
        vec![("Programming".to_string(), 2), ("Calculus".to_string(), 2)]
    );
}

#[test]
fn transcript_lists_grades_and_gpa() {
    let courses = catalog();
    let students = ranked_students(&courses);
    let service = TranscriptService::new(&students, &courses);

    let transcript = service.transcript("STU002").unwrap();
    assert!(transcript.contains("Name: Ben"));
    assert!(transcript.contains("Programming"));
    assert!(transcript.contains("Calculus"));
    assert!(transcript.contains("GPA: 7.50"));
}

#[test]
fn text_and_markdown_reports_agree() {
    let courses = catalog();
    let students = ranked_students(&courses);
    let service = TranscriptService::new(&students, &courses);
    let report = Report::build(&service, ReportKind::TopStudents(3));

    let text = report.render(ReportFormat::Text).unwrap();
    assert!(text.starts_with("--- Top 3 Students by GPA ---"));
    assert!(text.contains("9.00"));

    let markdown = report.render(ReportFormat::Markdown).unwrap();
    assert!(markdown.contains("# Top 3 Students by GPA"));
    assert!(markdown.contains("| Ada | 9.00 |"));
    assert!(markdown.contains("| Ben | 7.50 |"));
}

fn graded(courses: &CourseCatalog, roster: &[(&str, Grade)]) -> StudentDirectory {
    let mut students = StudentDirectory::new();
    let engine = EnrollmentService::default();
    for (name, grade) in roster {
        let email = format!("{}{}@campus.edu", name.to_lowercase(), students.len());
        let reg_no = students.register(*name, &email).unwrap().reg_no().to_string();
        engine.enroll(&mut students, courses, &reg_no, "CS101").unwrap();
        engine
            .assign_grade(&mut students, &reg_no, "CS101", *grade)
            .unwrap();
    }
    students
}

#[test]
fn top_n_ties_keep_directory_order() {
    let courses = catalog();
    let students = graded(
        &courses,
        &[("Zed", Grade::B), ("Amy", Grade::A), ("Bo", Grade::A), ("Cal", Grade::A)],
    );
    let service = TranscriptService::new(&students, &courses);

    let names: Vec<String> = service.top_n(3).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Amy", "Bo", "Cal"]);

    let names: Vec<String> = service.top_n(2).into_iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Amy", "Bo"]);
}

#[test]
fn top_n_shared_names_keep_the_higher_rank() {
    let courses = catalog();
    let students = graded(
        &courses,
        &[("Sam", Grade::B), ("Tia", Grade::C), ("Sam", Grade::A)],
    );
    let service = TranscriptService::new(&students, &courses);

    let top = service.top_n(3);
    assert_eq!(top.len(), 2);
    assert_eq!(top[0].0, "Sam");
    assert!((top[0].1 - 9.0).abs() < 1e-9);
    assert_eq!(top[1].0, "Tia");

    let top = service.top_n(2);
    assert_eq!(top.len(), 1);
    assert!((top[0].1 - 9.0).abs() < 1e-9);
}
