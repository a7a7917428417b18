//! Core module: the academic-records engine and its collaborators

pub mod config;
pub mod enrollment;
pub mod error;
pub mod models;
pub mod registry;
pub mod report;
pub mod storage;
pub mod transcript;
pub mod validators;

pub use enrollment::EnrollmentService;
pub use error::{RecordKind, RecordsError, Result};
pub use registry::{CourseCatalog, IdGenerator, Searchable, StudentDirectory};
pub use transcript::TranscriptService;
