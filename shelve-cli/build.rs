//! Build script for shelve-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
/// When adding/removing/modifying commands, update both files.
fn build_cli() -> Command {
    Command::new("shelve")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Organize files into dated, typed, or classified folders")
        .long_about(
            "Command-line tool for organizing a directory of files into dated, \
             typed, or classified folders using links or copies",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Path to the configuration file")
                .value_name("PATH")
                .global(true)
                .env("SHELVE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("by-date")
                .about("Organize files into {year}/{month} folders by modification time")
                .long_about(
                    "Route every input file into a year/month folder derived from its \
                     modification time",
                ),
            Command::new("by-type")
                .about("Organize files into folders by file type")
                .long_about("Route every input file into a category folder derived from its extension"),
            Command::new("classify")
                .about("Organize files using classification metadata")
                .long_about(
                    "Route files into folders and names chosen by an external classifier, \
                     read from a JSON metadata file",
                ),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    // Generate man pages at build time
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    // Generate main shelve.1 man page
    let app = build_cli();
    let man = Man::new(app);
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("shelve.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
