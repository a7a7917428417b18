//! Leveled logger for `CampusRecords`.
//! Feature flags: `log-info`, `log-debug`, `verbose`, `file-logging`.
//!
//! Messages go to stdout/stderr unless a log file is configured, in which case
//! prefixed records are appended to the file with a local timestamp.

use std::fmt::Arguments;
use std::path::Path;
use std::sync::atomic::{AtomicBool, AtomicU8, Ordering};
#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::Mutex,
};

/// Severity of a log record; lower values are more severe.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Failures
    Error = 1,
    /// Rejected operations and skipped records
    Warn = 2,
    /// Completed mutations
    Info = 3,
    /// Diagnostics
    Debug = 4,
}

impl Level {
    /// Level by name, ignoring case; `err` and `warning` are accepted too.
    #[must_use]
    pub fn parse(value: &str) -> Option<Self> {
        match value.to_ascii_lowercase().as_str() {
            "error" | "err" => Some(Self::Error),
            "warn" | "warning" => Some(Self::Warn),
            "info" => Some(Self::Info),
            "debug" => Some(Self::Debug),
            _ => None,
        }
    }

    const fn prefix(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }
}

const fn default_level() -> u8 {
    if cfg!(feature = "log-debug") {
        Level::Debug as u8
    } else if cfg!(feature = "log-info") {
        Level::Info as u8
    } else {
        Level::Warn as u8
    }
}

static LOG_LEVEL: AtomicU8 = AtomicU8::new(default_level());
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(cfg!(feature = "log-debug"));
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);
#[cfg(feature = "file-logging")]
static LOG_FILE: Mutex<Option<File>> = Mutex::new(None);

/// Set the global log level.
pub fn set_level(level: Level) {
    LOG_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Current global log level.
#[must_use]
pub fn level() -> Level {
    match LOG_LEVEL.load(Ordering::SeqCst) {
        1 => Level::Error,
        2 => Level::Warn,
        3 => Level::Info,
        _ => Level::Debug,
    }
}

/// Set the level from its name; false leaves the level unchanged.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    Level::parse(level).map(set_level).is_some()
}

/// Turn debug records on. Builds without `log-debug` ignore this.
pub fn enable_debug() {
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Whether debug records can be emitted.
pub fn is_debug_enabled() -> bool {
    cfg!(feature = "log-debug") && DEBUG_ENABLED.load(Ordering::SeqCst)
}

/// Turn `verbose!` output on. Builds without `verbose` ignore this.
pub fn enable_verbose() {
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Whether `verbose!` prints.
pub fn is_verbose_enabled() -> bool {
    cfg!(feature = "verbose") && VERBOSE_ENABLED.load(Ordering::SeqCst)
}

/// Send every record to `path` instead of the console, creating parent directories.
///
/// Returns `false` when the file cannot be opened or the `file-logging` feature is off.
#[cfg(feature = "file-logging")]
#[must_use]
pub fn init_file_logging(path: &Path) -> bool {
    let opened = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|()| OpenOptions::new().create(true).append(true).open(path));
    match (opened, LOG_FILE.lock()) {
        (Ok(file), Ok(mut sink)) => {
            *sink = Some(file);
            true
        }
        _ => false,
    }
}

/// File logging is compiled out; always `false`.
#[cfg(not(feature = "file-logging"))]
#[must_use]
pub const fn init_file_logging(_path: &Path) -> bool {
    false
}

#[cfg(feature = "file-logging")]
fn write_to_file(message: &str) -> bool {
    let Ok(mut sink) = LOG_FILE.lock() else {
        return false;
    };
    sink.as_mut().is_some_and(|file| {
        let stamp = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _ = writeln!(file, "{stamp} {message}").and_then(|()| file.flush());
        true
    })
}

#[cfg(not(feature = "file-logging"))]
const fn write_to_file(_message: &str) -> bool {
    false
}

fn emit(level: Level, msg: &str) {
    let prefix = level.prefix();
    if write_to_file(&format!("{prefix} {msg}")) {
        return;
    }
    match level {
        Level::Error | Level::Warn => eprintln!("{prefix} {msg}"),
        Level::Info | Level::Debug => println!("{prefix} {msg}"),
    }
}

fn should_log(level: Level) -> bool {
    match level {
        Level::Info if !cfg!(feature = "log-info") => return false,
        Level::Debug if !cfg!(feature = "log-debug") => return false,
        _ => {}
    }
    let current = LOG_LEVEL.load(Ordering::SeqCst);
    (level as u8) <= current && (level != Level::Debug || is_debug_enabled())
}

/// Backend of the logging macros.
#[doc(hidden)]
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }
    emit(level, &args.to_string());
}

/// Log at error level.
#[macro_export]
macro_rules! error { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Error, format_args!($($arg)*)) }; }
/// Log at warn level.
#[macro_export]
macro_rules! warn  { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Warn,  format_args!($($arg)*)) }; }
/// Log at info level; compiled out of builds without `log-info`.
#[macro_export]
macro_rules! info  { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Info,  format_args!($($arg)*)) }; }
/// Log at debug level once [`enable_debug`](crate::logger::enable_debug) has run.
#[macro_export]
macro_rules! debug { ($($arg:tt)*) => { $crate::logger::log_impl($crate::logger::Level::Debug, format_args!($($arg)*)) }; }
/// Print to stdout when verbose output is on; never goes to the log file.
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if $crate::logger::is_verbose_enabled() { println!($($arg)*); }
    }
}
