//! Identity generation for new records

use std::sync::atomic::{AtomicU64, Ordering};

/// Default registration number prefix
pub const DEFAULT_REG_PREFIX: &str = "STU";

/// Hands out numeric ids and registration numbers
///
/// Both counters are monotonic and atomic, so a shared generator never issues the
/// same value twice.
#[derive(Debug)]
pub struct IdGenerator {
    next_id: AtomicU64,
    next_reg: AtomicU64,
    prefix: String,
}

impl IdGenerator {
    /// Generator starting at id 1 and registration number `STU001`
    #[must_use]
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_REG_PREFIX)
    }

    /// Generator with a custom registration prefix
    #[must_use]
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            next_id: AtomicU64::new(1),
            next_reg: AtomicU64::new(1),
            prefix: prefix.into(),
        }
    }

    /// Next numeric id
    pub fn next_id(&self) -> u64 {
        self.next_id.fetch_add(1, Ordering::SeqCst)
    }

    /// Next registration number, zero padded to three digits (e.g., "STU007")
    pub fn next_reg_no(&self) -> String {
        let seq = self.next_reg.fetch_add(1, Ordering::SeqCst);
        format!("{}{seq:03}", self.prefix)
    }

    /// Make sure future registration numbers sort after `reg_no`
    ///
    /// Codes that do not carry this generator's prefix followed by digits are ignored, as
    /// are sequences too large to be followed by another.
    pub fn advance_past(&self, reg_no: &str) {
        let Some(digits) = reg_no
            .get(..self.prefix.len())
            .filter(|head| head.eq_ignore_ascii_case(&self.prefix))
            .map(|_| &reg_no[self.prefix.len()..])
        else {
            return;
        };
        if let Some(next) = digits.parse::<u64>().ok().and_then(|seq| seq.checked_add(1)) {
            self.next_reg.fetch_max(next, Ordering::SeqCst);
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
