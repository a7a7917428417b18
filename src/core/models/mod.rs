//! Data models for `CampusRecords`

pub mod course;
pub mod enrollment;
pub mod grade;
pub mod instructor;
pub mod person;
pub mod semester;
pub mod student;

pub use course::{Course, CourseBuilder, CourseCode};
pub use enrollment::Enrollment;
pub use grade::Grade;
pub use instructor::Instructor;
pub use person::{Person, Profile};
pub use semester::Semester;
pub use student::{Student, StudentStatus};
