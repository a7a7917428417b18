//! Instructor model

use super::{CourseCode, Person, Profile};
use serde::{Deserialize, Serialize};

/// A member of teaching staff
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Instructor {
    person: Person,
    department: String,
    courses_taught: Vec<CourseCode>,
}

impl Instructor {
    /// Create an instructor with no assigned courses
    #[must_use]
    pub fn new(id: u64, full_name: String, email: String, department: String) -> Self {
        Self {
            person: Person::new(id, full_name, email),
            department,
            courses_taught: Vec::new(),
        }
    }

    /// Shared person fields
    #[must_use]
    pub const fn person(&self) -> &Person {
        &self.person
    }

    /// Department name
    #[must_use]
    pub fn department(&self) -> &str {
        &self.department
    }

    /// Move the instructor to another department
    pub fn set_department(&mut self, department: String) {
        self.department = department;
        self.person.touch();
    }

    /// Courses taught, in assignment order
    #[must_use]
    pub fn courses_taught(&self) -> &[CourseCode] {
        &self.courses_taught
    }

    /// Assign a course; assigning the same code twice is a no-op
    pub fn add_course(&mut self, code: CourseCode) {
        if !self.courses_taught.contains(&code) {
            self.courses_taught.push(code);
        }
    }
}

impl Profile for Instructor {
    fn details(&self) -> String {
        format!(
            "Instructor Profile:\n  ID: {}\n  Name: {}\n  Department: {}",
            self.person.id(),
            self.person.full_name(),
            self.department
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_course_deduplicates() {
        let mut instructor = Instructor::new(
            3,
            "Edsger Dijkstra".to_string(),
            "ewd@campus.edu".to_string(),
            "Computer Science".to_string(),
        );

        instructor.add_course(CourseCode::new("CS201").unwrap());
        instructor.add_course(CourseCode::new("CS201").unwrap());
        instructor.add_course(CourseCode::new("CS301").unwrap());

        assert_eq!(instructor.courses_taught().len(), 2);
    }

    #[test]
    fn test_details_through_profile_trait() {
        let instructor = Instructor::new(
            9,
            "Barbara Liskov".to_string(),
            "liskov@campus.edu".to_string(),
            "EECS".to_string(),
        );
        let profile: &dyn Profile = &instructor;
        let details = profile.details();
        assert!(details.contains("ID: 9"));
        assert!(details.contains("Department: EECS"));
    }
}
