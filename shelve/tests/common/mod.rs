//! Common test utilities for integration tests.
//!
//! This module provides a workspace fixture with an input root to seed
//! and an output root to organize into, plus helpers for backdating
//! file modification times.

use std::path::{Path, PathBuf};
use std::time::SystemTime;

use chrono::{Local, TimeZone};
use shelve::operations::PlanOptions;
use shelve::DirectoryInventory;

/// A temporary workspace for one organizing run.
///
/// The input and output roots both exist; tests seed the input and
/// pre-shape the output as needed.
pub struct OrganizeFixture {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp: tempfile::TempDir,
    /// Input root seeded by the test
    pub input: PathBuf,
    /// Output root plans are built against
    pub output: PathBuf,
}

#[allow(dead_code)]
impl OrganizeFixture {
    /// Creates a fresh workspace.
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("should create temp dir");
        let input = temp.path().join("input");
        let output = temp.path().join("output");
        std::fs::create_dir_all(&input).expect("should create input root");
        std::fs::create_dir_all(&output).expect("should create output root");
        Self {
            temp,
            input,
            output,
        }
    }

    /// Creates an input file with per-file contents and returns its path.
    pub fn file(&self, name: &str) -> PathBuf {
        let path = self.input.join(name);
        std::fs::write(&path, format!("contents of {name}")).expect("should write input file");
        path
    }

    /// Creates an input file and backdates its modification time.
    pub fn file_dated(&self, name: &str, year: i32, month: u32, day: u32) -> PathBuf {
        let path = self.file(name);
        set_mtime(&path, year, month, day);
        path
    }

    /// Creates a directory under the output root and returns its path.
    pub fn output_dir(&self, rel: &str) -> PathBuf {
        let path = self.output.join(rel);
        std::fs::create_dir_all(&path).expect("should create output dir");
        path
    }

    /// Plan options targeting this fixture's output root.
    pub fn options(&self) -> PlanOptions {
        PlanOptions::new(&self.output)
    }

    /// A fresh inventory snapshot of the output root.
    pub fn inventory(&self) -> DirectoryInventory {
        DirectoryInventory::scan(&self.output)
    }
}

impl Default for OrganizeFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Sets a file's modification time to noon local time on the given day.
#[allow(dead_code)]
pub fn set_mtime(path: &Path, year: i32, month: u32, day: u32) {
    let local = Local
        .with_ymd_and_hms(year, month, day, 12, 0, 0)
        .unwrap();
    let time = SystemTime::from(local);
    let file = std::fs::File::options()
        .write(true)
        .open(path)
        .expect("should open file for mtime update");
    file.set_modified(time).expect("should set mtime");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_creates_roots() {
        let fixture = OrganizeFixture::new();
        assert!(fixture.input.is_dir());
        assert!(fixture.output.is_dir());
    }

    #[test]
    fn test_file_dated_sets_mtime() {
        let fixture = OrganizeFixture::new();
        let path = fixture.file_dated("old.txt", 2020, 6, 1);

        let modified = std::fs::metadata(&path).unwrap().modified().unwrap();
        let local: chrono::DateTime<Local> = modified.into();
        assert_eq!(local.format("%Y/%B").to_string(), "2020/June");
    }
}
