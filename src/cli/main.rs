//! Command-line interface entry point for `CampusRecords`

mod args;
mod commands;

use args::{Cli, Command};
use campus_records::config::Config;
use campus_records::core::Result;
use campus_records::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use campus_records::{error, info};
use clap::Parser;
use commands::Session;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config; otherwise use config logging.level; fallback warn
    let mut level = args
        .log_level
        .map(Level::from)
        .or_else(|| Level::parse(&config.logging.level))
        .unwrap_or(Level::Warn);

    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<std::path::PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(std::path::PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    let result = match args.command {
        Command::Config { subcommand } => {
            if let Err(message) = commands::config::run(subcommand, &mut config, &defaults) {
                fail(&message);
            }
            return;
        }
        Command::Backup { subcommand } => commands::data::backup(subcommand, &config),
        command => with_session(&config, |session| dispatch(command, session)),
    };

    if let Err(e) = result {
        fail(&e);
    }
}

/// Log and print a failure, then exit with status 1
fn fail(message: &dyn std::fmt::Display) -> ! {
    error!("{message}");
    eprintln!("✗ {message}");
    std::process::exit(1);
}

/// Open the records once and run `f` against them
fn with_session(config: &Config, f: impl FnOnce(&mut Session) -> Result<()>) -> Result<()> {
    let mut session = Session::open(config)?;
    f(&mut session)
}

/// Run a command that works on the loaded records
fn dispatch(command: Command, session: &mut Session) -> Result<()> {
    match command {
        Command::Student { subcommand } => commands::student::run(subcommand, session),
        Command::Course { subcommand } => commands::course::run(subcommand, session),
        Command::Enroll { reg_no, code } => commands::enrollment::enroll(session, &reg_no, &code),
        Command::Grade {
            reg_no,
            code,
            grade,
        } => commands::enrollment::grade(session, &reg_no, &code, grade),
        Command::Transcript { reg_no, output } => {
            commands::enrollment::transcript(session, &reg_no, output.as_deref())
        }
        Command::Report {
            kind,
            count,
            format,
            output,
        } => commands::report::run(session, kind.into_kind(count), format, output.as_deref()),
        Command::Data { subcommand } => commands::data::run(subcommand, session),
        Command::Config { .. } | Command::Backup { .. } => Ok(()),
    }
}
