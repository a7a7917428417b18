//! Input validation helpers

use regex::Regex;
use std::sync::LazyLock;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,6}$").expect("email pattern is valid")
});

/// Whether `email` looks like a deliverable address
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email.trim())
}

/// Whether `value` has any non-whitespace content
#[must_use]
pub fn is_not_blank(value: &str) -> bool {
    !value.trim().is_empty()
}
