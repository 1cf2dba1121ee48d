//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{ByDateCommand, ByTypeCommand, ClassifyCommand, CompletionsCommand};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for organizing files into dated, typed, or classified
/// folders.
#[derive(Parser)]
#[command(name = "shelve")]
#[command(version, about = "Organize files into dated, typed, or classified folders", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path to the configuration file
    #[arg(long, value_name = "PATH", global = true, env = "SHELVE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Organize files into {year}/{month} folders by modification time
    ByDate(ByDateCommand),

    /// Organize files into folders by file type
    ByType(ByTypeCommand),

    /// Organize files using classification metadata
    Classify(ClassifyCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
