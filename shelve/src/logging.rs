//! Logging infrastructure for the shelve library.
//!
//! This module provides two pieces: a simple stderr-based diagnostic
//! logger with configurable levels, and [`RunLog`], the sink that
//! per-operation progress messages are recorded to during an
//! organizing run.

use std::env;
use std::fmt;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::error::Result;

/// Logging level for controlling output verbosity.
///
/// Log levels are ordered from least verbose (Quiet) to most verbose (Verbose).
///
/// # Examples
///
/// ```
/// use shelve::LogLevel;
///
/// let quiet = LogLevel::Quiet;
/// let normal = LogLevel::Normal;
/// let verbose = LogLevel::Verbose;
///
/// assert!(quiet < normal);
/// assert!(normal < verbose);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    /// Suppress all non-essential output.
    Quiet,
    /// Normal output level (errors and warnings).
    Normal,
    /// Verbose output (errors, warnings, info, and debug messages).
    Verbose,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Quiet => write!(f, "quiet"),
            Self::Normal => write!(f, "normal"),
            Self::Verbose => write!(f, "verbose"),
        }
    }
}

impl LogLevel {
    /// Parses a log level from a string.
    ///
    /// Recognizes: "quiet", "normal", "verbose" (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelve::LogLevel;
    ///
    /// assert_eq!(LogLevel::parse("quiet").unwrap(), LogLevel::Quiet);
    /// assert_eq!(LogLevel::parse("VERBOSE").unwrap(), LogLevel::Verbose);
    /// assert!(LogLevel::parse("invalid").is_err());
    /// ```
    pub fn parse(s: &str) -> std::result::Result<Self, String> {
        match s.to_lowercase().as_str() {
            "quiet" => Ok(Self::Quiet),
            "normal" => Ok(Self::Normal),
            "verbose" => Ok(Self::Verbose),
            _ => Err(format!("invalid log level: {s}")),
        }
    }
}

/// A simple stderr-based logger for diagnostics.
///
/// The logger respects the configured log level and only outputs messages
/// at or above that level. Progress messages for individual file
/// operations go through [`RunLog`] instead.
///
/// # Examples
///
/// ```
/// use shelve::{Logger, LogLevel};
///
/// let logger = Logger::new(LogLevel::Normal);
/// logger.error("This is an error message");
/// logger.info("This will not be printed (requires Verbose)");
/// ```
pub struct Logger {
    level: LogLevel,
}

impl Logger {
    /// Creates a new logger with the specified log level.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelve::{Logger, LogLevel};
    ///
    /// let logger = Logger::new(LogLevel::Verbose);
    /// ```
    #[must_use]
    pub const fn new(level: LogLevel) -> Self {
        Self { level }
    }

    /// Returns the current log level.
    #[must_use]
    pub const fn level(&self) -> LogLevel {
        self.level
    }

    /// Logs an error message.
    ///
    /// Error messages are always displayed unless the level is Quiet.
    pub fn error(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("ERROR: {message}");
        }
    }

    /// Logs a warning message.
    ///
    /// Warning messages are displayed at Normal and Verbose levels.
    pub fn warn(&self, message: &str) {
        if self.level >= LogLevel::Normal {
            eprintln!("WARN: {message}");
        }
    }

    /// Logs an informational message.
    ///
    /// Info messages are only displayed at Verbose level.
    pub fn info(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("INFO: {message}");
        }
    }

    /// Logs a debug message.
    ///
    /// Debug messages are only displayed at Verbose level.
    pub fn debug(&self, message: &str) {
        if self.level >= LogLevel::Verbose {
            eprintln!("DEBUG: {message}");
        }
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new(LogLevel::Normal)
    }
}

/// Initializes a logger based on environment variables and CLI flags.
///
/// The priority order is:
/// 1. CLI flags (verbose/quiet)
/// 2. `SHELVE_LOG_MODE` environment variable
/// 3. Default (Normal)
///
/// # Arguments
///
/// * `verbose` - If true, sets level to Verbose
/// * `quiet` - If true, sets level to Quiet
///
/// If both `verbose` and `quiet` are true, `verbose` takes precedence.
///
/// # Examples
///
/// ```
/// use shelve::init_logger;
///
/// // Use default (Normal) level
/// let logger = init_logger(false, false);
///
/// // Force verbose
/// let logger = init_logger(true, false);
///
/// // Force quiet
/// let logger = init_logger(false, true);
/// ```
#[must_use]
pub fn init_logger(verbose: bool, quiet: bool) -> Logger {
    // CLI flags take precedence
    if verbose {
        return Logger::new(LogLevel::Verbose);
    }
    if quiet {
        return Logger::new(LogLevel::Quiet);
    }

    // Check environment variable
    if let Ok(env_value) = env::var("SHELVE_LOG_MODE") {
        if let Ok(level) = LogLevel::parse(&env_value) {
            return Logger::new(level);
        }
    }

    // Default to Normal
    Logger::new(LogLevel::Normal)
}

/// Sink for per-operation progress messages during an organizing run.
///
/// In silent mode messages are appended to a log file; otherwise they
/// are printed to stdout. Once the log is open, write failures are
/// swallowed: a broken log file must never interrupt a run that is
/// mid-way through creating links.
///
/// # Examples
///
/// ```
/// use shelve::RunLog;
///
/// let mut log = RunLog::console();
/// log.record("Created hardlink from 'a.txt' to 'out/a.txt'");
/// ```
pub struct RunLog {
    silent: bool,
    file: Option<File>,
}

impl RunLog {
    /// Creates a run log.
    ///
    /// When `silent` is true and `log_file` is given, the file is opened
    /// in append mode (parent directories are created as needed) and all
    /// recorded messages go there. When `silent` is true without a file,
    /// messages are discarded. Otherwise messages are printed to stdout
    /// and `log_file` is ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the log file or its parent directory cannot
    /// be created.
    pub fn new(silent: bool, log_file: Option<&Path>) -> Result<Self> {
        let file = match log_file {
            Some(path) if silent => {
                if let Some(parent) = path.parent() {
                    if !parent.as_os_str().is_empty() {
                        fs::create_dir_all(parent)?;
                    }
                }
                Some(OpenOptions::new().create(true).append(true).open(path)?)
            }
            _ => None,
        };
        Ok(Self { silent, file })
    }

    /// Creates a run log that prints every message to stdout.
    #[must_use]
    pub const fn console() -> Self {
        Self {
            silent: false,
            file: None,
        }
    }

    /// Returns true if messages are routed away from the console.
    #[must_use]
    pub const fn is_silent(&self) -> bool {
        self.silent
    }

    /// Records a progress message.
    ///
    /// This never fails: file write errors are dropped so that an
    /// organizing run keeps going even when the log disappears under it.
    pub fn record(&mut self, message: &str) {
        if self.silent {
            if let Some(file) = self.file.as_mut() {
                let _ = writeln!(file, "{message}");
            }
        } else {
            println!("{message}");
        }
    }
}
