//! Configuration module for `CampusRecords`

use crate::core::enrollment::DEFAULT_MAX_CREDITS_PER_SEMESTER;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Variable expanded to the application config directory
const DIR_VARIABLE: &str = "$CAMPUS_RECORDS";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Enrollment policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Maximum credits a student may hold in a single semester
    #[serde(default = "default_max_credits")]
    pub max_credits_per_semester: u32,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            max_credits_per_semester: DEFAULT_MAX_CREDITS_PER_SEMESTER,
        }
    }
}

const fn default_max_credits() -> u32 {
    DEFAULT_MAX_CREDITS_PER_SEMESTER
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Directory holding the live CSV data files
    #[serde(default)]
    pub data_dir: String,
    /// Directory receiving timestamped backups
    #[serde(default)]
    pub backup_dir: String,
    /// Student file name inside the data directory
    #[serde(default)]
    pub students_file: String,
    /// Course file name inside the data directory
    #[serde(default)]
    pub courses_file: String,
    /// Enrollment file name inside the data directory
    #[serde(default)]
    pub enrollments_file: String,
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Enrollment policy
    #[serde(default)]
    pub records: RecordsConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override the per-semester credit cap
    pub max_credits: Option<u32>,
    /// Override data directory
    pub data_dir: Option<String>,
    /// Override backup directory
    pub backup_dir: Option<String>,
}

/// Fill `target` from `default` when `target` is empty; returns whether it changed
fn fill_if_empty(target: &mut String, default: &str) -> bool {
    if target.is_empty() && !default.is_empty() {
        default.clone_into(target);
        true
    } else {
        false
    }
}

impl Config {
    /// Get the `$CAMPUS_RECORDS` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/campusrecords`
    /// - macOS: `~/Library/Application Support/campusrecords`
    /// - Windows: `%APPDATA%\campusrecords`
    #[must_use]
    pub fn get_campus_records_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("campusrecords")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only fields that are empty (or zero, for the credit cap) in the current config and
    /// set in `defaults` are updated, so upgrading picks up new keys without touching
    /// user settings.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        changed |= fill_if_empty(&mut self.logging.level, &defaults.logging.level);
        changed |= fill_if_empty(&mut self.logging.file, &defaults.logging.file);

        if self.records.max_credits_per_semester == 0
            && defaults.records.max_credits_per_semester != 0
        {
            self.records.max_credits_per_semester = defaults.records.max_credits_per_semester;
            changed = true;
        }

        changed |= fill_if_empty(&mut self.paths.data_dir, &defaults.paths.data_dir);
        changed |= fill_if_empty(&mut self.paths.backup_dir, &defaults.paths.backup_dir);
        changed |= fill_if_empty(&mut self.paths.students_file, &defaults.paths.students_file);
        changed |= fill_if_empty(&mut self.paths.courses_file, &defaults.paths.courses_file);
        changed |= fill_if_empty(
            &mut self.paths.enrollments_file,
            &defaults.paths.enrollments_file,
        );

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Overrides last for a single run and are never written back to the config file.
    /// Only non-`None` values replace config values.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(max_credits) = overrides.max_credits {
            self.records.max_credits_per_semester = max_credits;
        }

        if let Some(data_dir) = &overrides.data_dir {
            self.paths.data_dir.clone_from(data_dir);
        }
        if let Some(backup_dir) = &overrides.backup_dir {
            self.paths.backup_dir.clone_from(backup_dir);
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds, inside
    /// [`get_campus_records_dir`](Self::get_campus_records_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_campus_records_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$CAMPUS_RECORDS` in a string to the config directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let dir = Self::get_campus_records_dir();
            value.replace(DIR_VARIABLE, dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults; `$CAMPUS_RECORDS` is expanded in every
    /// path-like value.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.data_dir = Self::expand_variables(&config.paths.data_dir);
        config.paths.backup_dir = Self::expand_variables(&config.paths.backup_dir);

        Ok(config)
    }

    /// Load configuration from embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML. The defaults are
    /// compiled into the binary and covered by tests.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from the user config file, creating it from defaults on first run
    #[must_use]
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_file_path())
    }

    /// Load configuration from `config_file`, creating it from defaults if missing
    ///
    /// An existing file is merged with any newly added default fields and saved back.
    /// Falls back to defaults if the file cannot be read or parsed.
    #[must_use]
    pub fn load_from(config_file: &Path) -> Self {
        let defaults = Self::from_defaults();

        if !config_file.exists() {
            let _ = defaults.save_to(config_file);
            return defaults;
        }

        if let Ok(content) = fs::read_to_string(config_file) {
            if let Ok(mut config) = Self::from_toml(&content) {
                if config.merge_defaults(&defaults) {
                    let _ = config.save_to(config_file);
                }
                return config;
            }
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        self.save_to(&Self::get_config_file_path())
    }

    /// Save configuration to `config_file`, creating parent directories
    ///
    /// # Errors
    /// Returns an error if the directory cannot be created or the file cannot be written
    pub fn save_to(&self, config_file: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `max_credits`, `data_dir`, `backup_dir`,
    /// `students_file`, `courses_file`, `enrollments_file`. Dashed spellings are accepted.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "max_credits" | "max-credits" => {
                Some(self.records.max_credits_per_semester.to_string())
            }
            "data_dir" | "data-dir" => Some(self.paths.data_dir.clone()),
            "backup_dir" | "backup-dir" => Some(self.paths.backup_dir.clone()),
            "students_file" | "students-file" => Some(self.paths.students_file.clone()),
            "courses_file" | "courses-file" => Some(self.paths.courses_file.clone()),
            "enrollments_file" | "enrollments-file" => Some(self.paths.enrollments_file.clone()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is unknown or the value cannot be parsed
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "max_credits" | "max-credits" => {
                let credits = value
                    .parse::<u32>()
                    .ok()
                    .filter(|c| *c > 0)
                    .ok_or_else(|| {
                        format!("Invalid value for 'max_credits': '{value}' (expected a positive integer)")
                    })?;
                self.records.max_credits_per_semester = credits;
            }
            "data_dir" | "data-dir" => self.paths.data_dir = value.to_string(),
            "backup_dir" | "backup-dir" => self.paths.backup_dir = value.to_string(),
            "students_file" | "students-file" => self.paths.students_file = value.to_string(),
            "courses_file" | "courses-file" => self.paths.courses_file = value.to_string(),
            "enrollments_file" | "enrollments-file" => {
                self.paths.enrollments_file = value.to_string();
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to default)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "max_credits" | "max-credits" => {
                self.records.max_credits_per_semester = defaults.records.max_credits_per_semester;
            }
            "data_dir" | "data-dir" => self.paths.data_dir.clone_from(&defaults.paths.data_dir),
            "backup_dir" | "backup-dir" => {
                self.paths.backup_dir.clone_from(&defaults.paths.backup_dir);
            }
            "students_file" | "students-file" => self
                .paths
                .students_file
                .clone_from(&defaults.paths.students_file),
            "courses_file" | "courses-file" => self
                .paths
                .courses_file
                .clone_from(&defaults.paths.courses_file),
            "enrollments_file" | "enrollments-file" => self
                .paths
                .enrollments_file
                .clone_from(&defaults.paths.enrollments_file),
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds if there is no file.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }

    /// Live data directory
    #[must_use]
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.paths.data_dir)
    }

    /// Backup root directory
    #[must_use]
    pub fn backup_path(&self) -> PathBuf {
        PathBuf::from(&self.paths.backup_dir)
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[records]")?;
        writeln!(
            f,
            "  max_credits_per_semester = {}",
            self.records.max_credits_per_semester
        )?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  data_dir = \"{}\"", self.paths.data_dir)?;
        writeln!(f, "  backup_dir = \"{}\"", self.paths.backup_dir)?;
        writeln!(f, "  students_file = \"{}\"", self.paths.students_file)?;
        writeln!(f, "  courses_file = \"{}\"", self.paths.courses_file)?;
        writeln!(f, "  enrollments_file = \"{}\"", self.paths.enrollments_file)?;

        Ok(())
    }
}
