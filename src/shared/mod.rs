//! Shared helpers available to every consumer of the library

/// Returns the current version of the `CampusRecords` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

/// Human-readable application name used in banners and report headers
pub const APP_NAME: &str = "Campus Course & Records Manager";
