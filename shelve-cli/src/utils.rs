//! Utility functions for CLI operations.
//!
//! This module provides the pieces shared by the organize commands:
//! global options, the shared flag set, settings resolution against the
//! configuration file, and the plan preview/execute pipeline.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use shelve::config::{Config, ConfigLoader, LinkMode};
use shelve::operations::{LinkType, OrganizePlan, PlanExecutor, PlanOptions};
use shelve::path::resolve_root;
use shelve::{
    collect_source_files, init_logger, is_hidden, RunLog, DEFAULT_REUSE_THRESHOLD,
};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file path.
    pub config: Option<PathBuf>,
}

/// Flags shared by every organize command.
#[derive(Args)]
pub struct OrganizeArgs {
    /// Directory whose files are organized
    #[arg(long, value_name = "PATH", env = "SHELVE_INPUT")]
    pub input: Option<PathBuf>,

    /// Directory receiving the organized layout (default: {input}/organized)
    #[arg(long, value_name = "PATH", env = "SHELVE_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Link flavor used when materializing operations
    #[arg(long, value_enum, value_name = "MODE", ignore_case = true)]
    pub link: Option<LinkArg>,

    /// Preview operations without touching the filesystem
    #[arg(long)]
    pub dry_run: bool,

    /// Route execution events to the run log file instead of stdout
    #[arg(long)]
    pub silent: bool,

    /// Directory for timestamped run logs (default: ./logs)
    #[arg(long, value_name = "PATH")]
    pub log_dir: Option<PathBuf>,

    /// Exact run log file path, overriding --log-dir
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Similarity score at or above which an existing folder is reused
    #[arg(long, value_name = "FLOAT")]
    pub threshold: Option<f64>,

    /// Preview rendering format
    #[arg(long, value_enum, default_value = "human", ignore_case = true)]
    pub format: PreviewFormat,
}

/// Link flavor flag, mirroring the configuration file values.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum LinkArg {
    /// Hard links
    Hard,
    /// Symbolic links
    Soft,
    /// Plain copies
    Copy,
}

impl LinkArg {
    /// The configuration-level link mode this flag selects.
    pub const fn mode(self) -> LinkMode {
        match self {
            Self::Hard => LinkMode::Hard,
            Self::Soft => LinkMode::Soft,
            Self::Copy => LinkMode::Copy,
        }
    }
}

/// Preview rendering format for organize commands.
#[derive(Debug, Clone, Copy, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum PreviewFormat {
    /// Simulated destination tree plus summary counts
    Human,
    /// JSON document with operations, warnings, and summary
    Json,
}

impl PreviewFormat {
    /// The library-level preview format this flag selects.
    pub const fn to_output(self) -> shelve::output::PreviewFormat {
        match self {
            Self::Human => shelve::output::PreviewFormat::Human,
            Self::Json => shelve::output::PreviewFormat::Json,
        }
    }
}

/// Resolved settings for one organize run, after merging command-line
/// flags, the configuration file, and built-in defaults.
#[derive(Debug, Clone)]
pub struct RunSettings {
    /// Input root to organize (absolute, tilde-expanded).
    pub input: PathBuf,

    /// Output root receiving the organized layout.
    pub output: PathBuf,

    /// Link flavor for planned operations.
    pub link_type: LinkType,

    /// Preview without touching the filesystem.
    pub dry_run: bool,

    /// Route execution events to the run log file.
    pub silent: bool,

    /// Run log file path (only written when silent).
    pub log_file: PathBuf,

    /// Folder reuse threshold.
    pub threshold: f64,

    /// Preview rendering format.
    pub format: shelve::output::PreviewFormat,
}

/// Load the configuration file layer.
///
/// Uses the explicit `--config` path when given, otherwise discovers
/// `shelve.yaml` in the current directory.
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let working_dir = env::current_dir()?;
    ConfigLoader::load(global.config.as_deref(), &working_dir).map_err(CliError::from)
}

/// Merge command-line flags with the configuration file into run settings.
///
/// Precedence is flag over file over default. The input root is required
/// from one of the two explicit sources; everything else has a default.
pub fn resolve_run(args: &OrganizeArgs, global: &GlobalOptions) -> Result<RunSettings, CliError> {
    let config = load_configuration(global)?;

    let input_raw = args
        .input
        .clone()
        .or_else(|| config.input.clone())
        .ok_or_else(|| {
            CliError::InvalidArguments(
                "an input directory is required (--input or `input` in shelve.yaml)".to_string(),
            )
        })?;
    let input = resolve_root(&input_raw).map_err(CliError::from)?;

    let output = match args.output.clone().or_else(|| config.output.clone()) {
        Some(raw) => resolve_root(&raw).map_err(CliError::from)?,
        None => input.join("organized"),
    };

    let link_mode = args
        .link
        .map(LinkArg::mode)
        .or(config.link)
        .unwrap_or(LinkMode::Hard);

    let threshold = match args.threshold {
        Some(value) => {
            if !(0.0..=1.0).contains(&value) {
                return Err(CliError::InvalidArguments(format!(
                    "--threshold must be between 0 and 1, got {value}"
                )));
            }
            value
        }
        None => config.reuse_threshold.unwrap_or(DEFAULT_REUSE_THRESHOLD),
    };

    let log_file = args
        .log_file
        .clone()
        .or_else(|| config.log_file.clone())
        .unwrap_or_else(|| {
            let log_dir = args
                .log_dir
                .clone()
                .or_else(|| config.log_dir.clone())
                .unwrap_or_else(|| PathBuf::from("logs"));
            default_log_file(&log_dir)
        });

    Ok(RunSettings {
        input,
        output,
        link_type: link_mode.link_type(),
        dry_run: args.dry_run || config.dry_run.unwrap_or(false),
        silent: args.silent || config.silent.unwrap_or(false),
        log_file,
        threshold,
        format: args.format.to_output(),
    })
}

/// Default run log path: `{log_dir}/{timestamp}/operation.log`.
fn default_log_file(log_dir: &Path) -> PathBuf {
    let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
    log_dir.join(timestamp).join("operation.log")
}

/// Planner options derived from the resolved settings.
pub fn plan_options(settings: &RunSettings) -> PlanOptions {
    PlanOptions::new(&settings.output)
        .with_link_type(settings.link_type)
        .with_reuse_threshold(settings.threshold)
}

/// Enumerate the candidate files for a run.
///
/// Files under the output root are excluded so re-runs do not re-ingest
/// already-organized files, and hidden files are dropped from the batch.
pub fn collect_sources(settings: &RunSettings) -> Result<Vec<PathBuf>, CliError> {
    let mut sources = collect_source_files(&settings.input, Some(&settings.output))?;
    sources.retain(|path| !is_hidden(path));
    Ok(sources)
}

/// Preview and execute a finished plan.
///
/// Warnings surface on stderr, the preview renders on stdout, and the
/// operations run through the run log. Dry runs stop after recording the
/// per-operation previews.
pub fn finish_run(
    plan: &OrganizePlan,
    settings: &RunSettings,
    global: &GlobalOptions,
) -> Result<(), CliError> {
    let logger = init_logger(global.verbose, global.quiet);
    logger.info(&format!(
        "{} operations planned into '{}'",
        plan.len(),
        settings.output.display()
    ));
    if settings.silent {
        logger.info(&format!(
            "Recording run log to '{}'",
            settings.log_file.display()
        ));
    }

    for warning in plan.warnings() {
        logger.warn(warning);
    }

    if !global.quiet {
        let formatter = settings.format.create_formatter(&settings.output);
        println!("{}", formatter.format(plan)?);
    }

    let mut run_log = RunLog::new(settings.silent, Some(&settings.log_file))?;
    let mut executor = PlanExecutor::new(&mut run_log);
    if settings.dry_run {
        executor = executor.dry_run();
    }
    let report = executor.execute(plan);

    if settings.dry_run {
        return Ok(());
    }

    println!(
        "Completed {} of {} operations ({} failed)",
        report.completed(),
        report.total,
        report.failed
    );

    if report.all_succeeded() {
        Ok(())
    } else {
        Err(CliError::OperationsFailed {
            failed: report.failed,
            total: report.total,
        })
    }
}
