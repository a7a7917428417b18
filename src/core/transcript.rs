//! Transcript and academic reporting
//!
//! Read-only views derived from the student directory, the course catalog and the
//! enrollments each student owns. Nothing here mutates state.

use crate::core::error::{RecordsError, Result};
use crate::core::models::{Profile, Student};
use crate::core::registry::{CourseCatalog, StudentDirectory};
use std::collections::HashMap;
use std::fmt::Write;

/// GPA per student name. Students sharing a name collapse into one entry (last wins).
pub type GpaDistribution = HashMap<String, f64>;

/// Student names with their GPA, best first
pub type RankedGpa = Vec<(String, f64)>;

/// Course titles with their enrollment counts, most enrolled first
pub type EnrollmentStats = Vec<(String, usize)>;

/// Bucket used for enrollments whose course code no longer resolves
pub const UNKNOWN_COURSE: &str = "Unknown Course";

/// Placeholder shown for enrollments without a grade
pub const NOT_GRADED: &str = "N/A";

const RULE: &str = "========================================";
const TABLE_RULE: &str = "------------------------------------------------------------";

/// Computes GPAs, transcripts and enrollment statistics
#[derive(Debug, Clone, Copy)]
pub struct TranscriptService<'a> {
    students: &'a StudentDirectory,
    courses: &'a CourseCatalog,
}

impl<'a> TranscriptService<'a> {
    /// Reporting view over a directory and a catalog
    #[must_use]
    pub const fn new(students: &'a StudentDirectory, courses: &'a CourseCatalog) -> Self {
        Self { students, courses }
    }

    /// Credit-weighted grade point average
    ///
    /// Only graded enrollments whose course resolves contribute, to both the weighted
    /// sum and the credit total. Returns `0.0` when nothing contributes.
    #[must_use]
    pub fn gpa(&self, student: &Student) -> f64 {
        let (points, credits) = student
            .enrollments()
            .iter()
            .filter_map(|e| {
                let grade = e.grade()?;
                let course = self.courses.find_by_code(e.course_code().as_str())?;
                Some((grade.points(), course.credits()))
            })
            .fold((0.0_f64, 0_u32), |(points, credits), (grade_points, course_credits)| {
                (
                    points + grade_points * f64::from(course_credits),
                    credits + course_credits,
                )
            });

        if credits == 0 {
            0.0
        } else {
            points / f64::from(credits)
        }
    }

    /// Fixed-format academic transcript for one student
    ///
    /// # Errors
    /// Returns [`RecordsError::NotFound`] if `reg_no` does not resolve
    pub fn transcript(&self, reg_no: &str) -> Result<String> {
        let student = self
            .students
            .find_by_reg_no(reg_no)
            .ok_or_else(|| RecordsError::student_not_found(reg_no))?;

        let mut out = String::new();
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "           ACADEMIC TRANSCRIPT          ");
        let _ = writeln!(out, "{RULE}");
        let _ = writeln!(out, "{}\n", student.details());

        if student.enrollments().is_empty() {
            let _ = writeln!(out, "No courses enrolled.");
        } else {
            let _ = writeln!(
                out,
                "{:<10} | {:<30} | {:<7} | {:<5}",
                "Code", "Course Title", "Credits", "Grade"
            );
            let _ = writeln!(out, "{TABLE_RULE}");

            for enrollment in student.enrollments() {
                let course = self.courses.find_by_code(enrollment.course_code().as_str());
                let title = course.map_or(UNKNOWN_COURSE, |c| c.title());
                let credits = course.map_or_else(|| "-".to_string(), |c| c.credits().to_string());
                let grade = enrollment
                    .grade()
                    .map_or(NOT_GRADED, |g| g.letter());
                let _ = writeln!(
                    out,
                    "{:<10} | {:<30} | {:<7} | {:<5}",
                    enrollment.course_code().as_str(),
                    title,
                    credits,
                    grade
                );
            }
        }

        let _ = writeln!(out, "\nGPA: {:.2}", self.gpa(student));
        let _ = writeln!(out, "{RULE}");
        Ok(out)
    }

    /// GPA of every student keyed by full name
    #[must_use]
    pub fn gpa_distribution(&self) -> GpaDistribution {
        let mut distribution = GpaDistribution::new();
        for student in self.students.iter() {
            distribution.insert(student.full_name().to_string(), self.gpa(student));
        }
        distribution
    }

    /// The `n` best students by GPA
    ///
    /// Ties keep directory order. When two ranked students share a name only the
    /// higher-ranked one is kept, so the result can be shorter than `n`.
    #[must_use]
    pub fn top_n(&self, n: usize) -> RankedGpa {
        let mut ranked: RankedGpa = self
            .students
            .iter()
            .map(|s| (s.full_name().to_string(), self.gpa(s)))
            .collect();
        ranked.sort_by(|a, b| b.1.total_cmp(&a.1));
        ranked.truncate(n);

        let mut result = RankedGpa::with_capacity(ranked.len());
        for (name, gpa) in ranked {
            if !result.iter().any(|(seen, _)| *seen == name) {
                result.push((name, gpa));
            }
        }
        result
    }

    /// Number of enrollments per course title across all students
    ///
    /// Unresolvable codes are counted under [`UNKNOWN_COURSE`]. Ties keep the order in
    /// which titles were first encountered.
    #[must_use]
    pub fn course_enrollment_stats(&self) -> EnrollmentStats {
        let mut stats = EnrollmentStats::new();
        for enrollment in self.students.iter().flat_map(Student::enrollments) {
            let title = self
                .courses
                .find_by_code(enrollment.course_code().as_str())
                .map_or(UNKNOWN_COURSE, |c| c.title());

            if let Some(entry) = stats.iter_mut().find(|(t, _)| t == title) {
                entry.1 += 1;
            } else {
                stats.push((title.to_string(), 1));
            }
        }
        stats.sort_by(|a, b| b.1.cmp(&a.1));
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::{Course, Grade, Semester};
    use crate::core::EnrollmentService;

    fn catalog() -> CourseCatalog {
        let mut courses = CourseCatalog::new();
        for (code, title, credits) in [
            ("CS101", "Programming", 3),
            ("CS102", "Data Structures", 4),
            ("MA101", "Calculus", 4),
        ] {
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

    fn enroll_graded(
        students: &mut StudentDirectory,
        courses: &CourseCatalog,
        reg_no: &str,
        code: &str,
        grade: Option<Grade>,
    ) {
        let engine = EnrollmentService::default();
        engine.enroll(students, courses, reg_no, code).unwrap();
        if let Some(grade) = grade {
            engine.assign_grade(students, reg_no, code, grade).unwrap();
        }
    }

    #[test]
    fn test_gpa_is_credit_weighted() {
        let courses = catalog();
        let mut students = StudentDirectory::new();
        students.register("Ada", "ada@campus.edu").unwrap();
        enroll_graded(&mut students, &courses, "STU001", "CS101", Some(Grade::A));
        enroll_graded(&mut students, &courses, "STU001", "CS102", Some(Grade::B));

        let service = TranscriptService::new(&students, &courses);
        let gpa = service.gpa(students.find_by_reg_no("STU001").unwrap());
        assert!((gpa - 59.0 / 7.0).abs() < 1e-9);
        assert_eq!(format!("{gpa:.2}"), "8.43");
    }

    #[test]
    fn test_gpa_ignores_ungraded_and_unresolved() {
        let courses = catalog();
        let mut students = StudentDirectory::new();
        students.register("Ada", "ada@campus.edu").unwrap();
        enroll_graded(&mut students, &courses, "STU001", "CS101", None);

        let service = TranscriptService::new(&students, &courses);
        let student = students.find_by_reg_no("STU001").unwrap();
        assert!(service.gpa(student).abs() < f64::EPSILON);

        let mut graded = StudentDirectory::new();
        graded.register("Bob", "bob@campus.edu").unwrap();
        enroll_graded(&mut graded, &courses, "STU001", "MA101", Some(Grade::S));
        let empty_catalog = CourseCatalog::new();
        let service = TranscriptService::new(&graded, &empty_catalog);
        assert!(service.gpa(graded.find_by_reg_no("STU001").unwrap()).abs() < f64::EPSILON);
    }

    #[test]
    fn test_transcript_layout() {
        let courses = catalog();
        let mut students = StudentDirectory::new();
        students.register("Ada Lovelace", "ada@campus.edu").unwrap();
        enroll_graded(&mut students, &courses, "STU001", "CS101", Some(Grade::A));
        enroll_graded(&mut students, &courses, "STU001", "CS102", None);

        let service = TranscriptService::new(&students, &courses);
        let text = service.transcript("stu001").unwrap();

        assert!(text.contains("ACADEMIC TRANSCRIPT"));
        assert!(text.contains("RegNo: STU001"));
        let rows: Vec<&str> = text.lines().filter(|l| l.starts_with("CS1")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].contains("Programming") && rows[0].trim_end().ends_with('A'));
        assert!(rows[1].contains("Data Structures") && rows[1].contains(NOT_GRADED));
        assert!(text.contains("GPA: 9.00"));
    }

    #[test]
    fn test_transcript_without_enrollments() {
        let courses = catalog();
        let mut students = StudentDirectory::new();
        students.register("Ada Lovelace", "ada@campus.edu").unwrap();

        let service = TranscriptService::new(&students, &courses);
        let text = service.transcript("STU001").unwrap();
        assert!(text.contains("No courses enrolled."));
        assert!(text.contains("GPA: 0.00"));
        assert!(service.transcript("STU002").is_err());
    }

    #[test]
    fn test_distribution_collapses_shared_names() {
        let courses = catalog();
        let mut students = StudentDirectory::new();
        students.register("Sam", "sam1@campus.edu").unwrap();
        students.register("Sam", "sam2@campus.edu").unwrap();
        enroll_graded(&mut students, &courses, "STU001", "CS101", Some(Grade::A));
        enroll_graded(&mut students, &courses, "STU002", "CS101", Some(Grade::C));

        let service = TranscriptService::new(&students, &courses);
        let distribution = service.gpa_distribution();
        assert_eq!(distribution.len(), 1);
        assert!((distribution["Sam"] - 7.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_stats_order_and_unknown_bucket() {
        let courses = catalog();
        let mut students = StudentDirectory::new();
        students.register("A", "a@campus.edu").unwrap();
        students.register("B", "b@campus.edu").unwrap();
        enroll_graded(&mut students, &courses, "STU001", "CS101", None);
        enroll_graded(&mut students, &courses, "STU001", "MA101", None);
        enroll_graded(&mut students, &courses, "STU002", "MA101", None);

        let service = TranscriptService::new(&students, &courses);
        let stats = service.course_enrollment_stats();
        assert_eq!(
            stats,
            vec![("Calculus".to_string(), 2), ("Programming".to_string(), 1)]
        );

        let mut partial = CourseCatalog::new();
        partial.add(courses.find_by_code("MA101").unwrap().clone());
        let service = TranscriptService::new(&students, &partial);
        let stats = service.course_enrollment_stats();
        assert_eq!(
            stats,
            vec![("Calculus".to_string(), 2), (UNKNOWN_COURSE.to_string(), 1)]
        );
    }
}
