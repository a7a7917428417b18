//! Identity shared by every person on campus

use chrono::{Local, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Capability implemented by every kind of person record
pub trait Profile {
    /// Multi-line human readable profile block
    fn details(&self) -> String;
}

/// Identity, contact details and bookkeeping timestamps
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    id: u64,
    full_name: String,
    email: String,
    created_at: NaiveDateTime,
    modified_at: NaiveDateTime,
}

impl Person {
    /// Create a person with the given numeric id, stamped with the current local time
    #[must_use]
    pub fn new(id: u64, full_name: String, email: String) -> Self {
        let now = Local::now().naive_local();
        Self {
            id,
            full_name,
            email,
            created_at: now,
            modified_at: now,
        }
    }

    /// Numeric identity
    #[must_use]
    pub const fn id(&self) -> u64 {
        self.id
    }

    /// Full name
    #[must_use]
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Email address
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Creation timestamp
    #[must_use]
    pub const fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Last modification timestamp
    #[must_use]
    pub const fn modified_at(&self) -> NaiveDateTime {
        self.modified_at
    }

    /// Replace the full name
    pub fn set_full_name(&mut self, full_name: String) {
        self.full_name = full_name;
        self.touch();
    }

    /// Replace the email address
    pub fn set_email(&mut self, email: String) {
        self.email = email;
        self.touch();
    }

    /// Bump the modification timestamp
    pub fn touch(&mut self) {
        self.modified_at = Local::now().naive_local();
    }
}
