//! Academic semesters

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Semester a course is offered in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Semester {
    /// Spring term
    Spring,
    /// Summer term
    Summer,
    /// Fall term
    Fall,
}

impl Semester {
    /// Upper-case name as persisted in CSV files
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Spring => "SPRING",
            Self::Summer => "SUMMER",
            Self::Fall => "FALL",
        }
    }
}

impl FromStr for Semester {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "SPRING" => Ok(Self::Spring),
            "SUMMER" => Ok(Self::Summer),
            "FALL" => Ok(Self::Fall),
            _ => Err(format!(
                "Invalid semester '{s}': expected SPRING, SUMMER, or FALL"
            )),
        }
    }
}

impl fmt::Display for Semester {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}
