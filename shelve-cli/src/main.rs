//! Main entry point for the shelve CLI.
//!
//! This is the command-line interface for the shelve file organizer.
//! It provides commands for organizing a directory of files:
//! - `by-date`: Route files into {year}/{month} folders by modification time
//! - `by-type`: Route files into folders by file type
//! - `classify`: Route files using classification metadata
//! - `completions`: Generate shell completion scripts

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::ByDate(cmd) => cmd.execute(&global),
        cli::Command::ByType(cmd) => cmd.execute(&global),
        cli::Command::Classify(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
