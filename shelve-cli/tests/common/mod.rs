//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary input/output directories
//! - Command builder helpers for common patterns
//! - Test data fixtures

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with isolated input and output directories.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Input root seeded by the test
    pub input: PathBuf,
    /// Output root the run organizes into
    pub output: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    ///
    /// The input directory is created; the output directory is left for
    /// the executor to create.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        let input = temp_path.join("inbox");
        let output = temp_path.join("sorted");
        std::fs::create_dir_all(&input).expect("Failed to create input dir");

        Self {
            temp_dir,
            temp_path,
            input,
            output,
        }
    }

    /// Get a bare command builder without pre-configured flags.
    ///
    /// The shelve environment variables are cleared so ambient values
    /// cannot leak into the test; tests that exercise them set them
    /// explicitly.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("shelve").expect("Failed to find shelve binary");
        cmd.current_dir(&self.temp_path)
            .env_remove("SHELVE_CONFIG")
            .env_remove("SHELVE_INPUT")
            .env_remove("SHELVE_OUTPUT")
            .env_remove("SHELVE_LOG_MODE");
        cmd
    }

    /// Get a command builder for an organize subcommand with the
    /// environment's input and output roots pre-configured.
    pub fn organize(&self, subcommand: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg(subcommand)
            .arg("--input")
            .arg(&self.input)
            .arg("--output")
            .arg(&self.output);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Create a file in the input directory.
    pub fn create_input_file(&self, name: &str) -> PathBuf {
        let path = self.input.join(name);
        std::fs::write(&path, b"test contents").expect("Failed to create input file");
        path
    }

    /// Write a configuration file and return its path.
    pub fn write_config(&self, name: &str, body: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, body).expect("Failed to write config file");
        path
    }

    /// Write a classification metadata file and return its path.
    ///
    /// Records are (file_path, foldername, filename) triples.
    pub fn write_metadata(&self, records: &[(&Path, &str, &str)]) -> PathBuf {
        let entries: Vec<serde_json::Value> = records
            .iter()
            .map(|(file_path, foldername, filename)| {
                serde_json::json!({
                    "file_path": file_path.display().to_string(),
                    "foldername": foldername,
                    "filename": filename,
                })
            })
            .collect();
        let path = self.temp_path.join("metadata.json");
        let body = serde_json::to_string_pretty(&entries).expect("Failed to serialize metadata");
        std::fs::write(&path, body).expect("Failed to write metadata file");
        path
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}
