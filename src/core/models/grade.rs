//! Letter grades and their grade points

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic grade on the ten-point scale
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    /// Outstanding (10.0)
    S,
    /// Excellent (9.0)
    A,
    /// Good (8.0)
    B,
    /// Average (7.0)
    C,
    /// Pass (6.0)
    D,
    /// Fail (5.0)
    E,
    /// Fail (0.0)
    F,
}

impl Grade {
    /// Every grade, best first
    pub const ALL: [Self; 7] = [Self::S, Self::A, Self::B, Self::C, Self::D, Self::E, Self::F];

    /// Numeric grade point used in GPA computation
    #[must_use]
    pub const fn points(self) -> f64 {
        match self {
            Self::S => 10.0,
            Self::A => 9.0,
            Self::B => 8.0,
            Self::C => 7.0,
            Self::D => 6.0,
            Self::E => 5.0,
            Self::F => 0.0,
        }
    }

    /// Single-letter code
    #[must_use]
    pub const fn letter(self) -> &'static str {
        match self {
            Self::S => "S",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
            Self::E => "E",
            Self::F => "F",
        }
    }
}

impl FromStr for Grade {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|g| g.letter().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| format!("Invalid grade '{s}': expected one of S, A, B, C, D, E, F"))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.letter())
    }
}
