//! Shared library for `CampusRecords`
//! Contains the academic-records core used by the CLI

pub mod core;
pub mod logger;
pub mod shared;

pub use crate::core::config;
pub use shared::*;
