//! CLI argument definitions for `CampusRecords`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use campus_records::config::ConfigOverrides;
use campus_records::core::models::{Grade, Semester, StudentStatus};
use campus_records::core::report::{ReportFormat, ReportKind, DEFAULT_TOP_N};
use campus_records::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `max_credits`, `data_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Delete the config file so the next run starts from the defaults.
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

/// Sort order for student listings
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum StudentOrder {
    /// Registration order
    #[default]
    Registered,
    /// Full name, ignoring case
    Name,
}

/// Sort order for course listings
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum CourseOrder {
    /// Catalog order
    #[default]
    Catalog,
    /// Title, ignoring case
    Title,
    /// Department, then title
    Department,
}

/// Report selectable on the command line
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum ReportArg {
    /// GPA of every student
    Gpa,
    /// Best students by GPA
    Top,
    /// Enrollment count per course
    Enrollments,
}

impl ReportArg {
    /// Resolve to a report, using `count` for the top-students report
    pub const fn into_kind(self, count: usize) -> ReportKind {
        match self {
            Self::Gpa => ReportKind::GpaDistribution,
            Self::Top => ReportKind::TopStudents(count),
            Self::Enrollments => ReportKind::EnrollmentStats,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum StudentSubcommand {
    /// Register a new ACTIVE student with a generated registration number.
    Add {
        /// Full name
        #[arg(value_name = "NAME")]
        name: String,
        /// Email address
        #[arg(value_name = "EMAIL")]
        email: String,
    },
    /// List all students.
    List {
        /// Listing order
        #[arg(long, value_enum, default_value_t)]
        sort: StudentOrder,
    },
    /// Show a student's profile and enrollments.
    Show {
        /// Registration number (e.g., STU001)
        #[arg(value_name = "REGNO")]
        reg_no: String,
    },
    /// Update a student's name, email or status.
    Update {
        /// Registration number
        #[arg(value_name = "REGNO")]
        reg_no: String,
        /// New full name
        #[arg(long)]
        name: Option<String>,
        /// New email address
        #[arg(long)]
        email: Option<String>,
        /// New status (ACTIVE, INACTIVE, GRADUATED)
        #[arg(long)]
        status: Option<StudentStatus>,
    },
    /// Mark a student INACTIVE.
    Deactivate {
        /// Registration number
        #[arg(value_name = "REGNO")]
        reg_no: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a course to the catalog.
    Add {
        /// Course code (e.g., CS101)
        #[arg(value_name = "CODE")]
        code: String,
        /// Course title
        #[arg(value_name = "TITLE")]
        title: String,
        /// Credit count
        #[arg(long)]
        credits: u32,
        /// Semester (SPRING, SUMMER, FALL)
        #[arg(long)]
        semester: Semester,
        /// Instructor name
        #[arg(long, default_value = "")]
        instructor: String,
        /// Owning department
        #[arg(long, default_value = "")]
        department: String,
    },
    /// List courses, optionally filtered.
    List {
        /// Only courses taught by this instructor
        #[arg(long)]
        instructor: Option<String>,
        /// Only courses of this department
        #[arg(long)]
        department: Option<String>,
        /// Only courses running in this semester
        #[arg(long)]
        semester: Option<Semester>,
        /// Listing order
        #[arg(long, value_enum, default_value_t)]
        sort: CourseOrder,
    },
    /// Close a course for new listings.
    Deactivate {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Reopen a closed course.
    Activate {
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum DataSubcommand {
    /// Replace all records with the CSV files of a directory.
    Import {
        /// Directory holding students.csv, courses.csv and optionally enrollments.csv
        #[arg(long, value_name = "DIR")]
        from: PathBuf,
    },
    /// Write all records as CSV files into a directory.
    Export {
        /// Target directory (defaults to the configured data directory)
        #[arg(long, value_name = "DIR")]
        to: Option<PathBuf>,
    },
}

#[derive(Debug, Subcommand)]
pub enum BackupSubcommand {
    /// Copy the data files into a new timestamped folder.
    Create,
    /// Show the total size of all backups.
    Size,
    /// List existing backup folders.
    List,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Manage students.
    Student {
        #[command(subcommand)]
        subcommand: StudentSubcommand,
    },
    /// Manage the course catalog.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Enroll a student in a course.
    ///
    /// Rejects duplicates and enrollments that exceed the per-semester credit cap.
    Enroll {
        /// Registration number
        #[arg(value_name = "REGNO")]
        reg_no: String,
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
    },
    /// Record or overwrite a grade (S, A, B, C, D, E, F).
    Grade {
        /// Registration number
        #[arg(value_name = "REGNO")]
        reg_no: String,
        /// Course code
        #[arg(value_name = "CODE")]
        code: String,
        /// Grade letter
        #[arg(value_name = "GRADE")]
        grade: Grade,
    },
    /// Print a student's academic transcript.
    Transcript {
        /// Registration number
        #[arg(value_name = "REGNO")]
        reg_no: String,
        /// Write the transcript to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Generate an academic report: gpa, top, or enrollments.
    Report {
        /// Report to generate
        #[arg(value_name = "REPORT", value_enum)]
        kind: ReportArg,
        /// Number of students in the `top` report
        #[arg(short = 'n', long = "count", default_value_t = DEFAULT_TOP_N)]
        count: usize,
        /// Report format: text or markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value_t)]
        format: ReportFormat,
        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Import or export CSV data.
    Data {
        #[command(subcommand)]
        subcommand: DataSubcommand,
    },
    /// Manage backups of the data directory.
    ///
    /// If no subcommand is provided, creates a backup.
    Backup {
        #[command(subcommand)]
        subcommand: Option<BackupSubcommand>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "campusrecords",
    about = "Campus Course & Records Manager command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override the per-semester credit cap
    #[arg(long = "max-credits", value_name = "CREDITS")]
    pub max_credits: Option<u32>,

    /// Override config data directory
    #[arg(long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override config backup directory
    #[arg(long = "backup-dir", value_name = "DIR")]
    pub backup_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            max_credits: self.max_credits,
            data_dir: self
                .data_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            backup_dir: self
                .backup_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
        }
    }
}
