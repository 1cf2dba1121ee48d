//! Directory inventory snapshots and source file enumeration.
//!
//! The "state" this system consults is the directory structure already on
//! disk. A [`DirectoryInventory`] is a one-shot snapshot of every
//! subdirectory under an output root, taken once at the start of a planning
//! pass and treated as immutable until the pass ends. The snapshot is
//! sorted and deduplicated, which keeps reconciliation tie-breaks
//! reproducible across runs and platforms.
//!
//! Source enumeration lives here too: [`collect_source_files`] walks an
//! input root into the ordered file list a planning pass consumes.
//!
//! # Examples
//!
//! ```no_run
//! use shelve::inventory::DirectoryInventory;
//! use std::path::Path;
//!
//! let inventory = DirectoryInventory::scan(Path::new("/srv/sorted"));
//! for dir in inventory.iter() {
//!     println!("existing: {dir}");
//! }
//! ```

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::error::{Error, Result};
use crate::path::RelativePath;

/// A sorted, deduplicated snapshot of the subdirectories under an output
/// root.
///
/// The snapshot may be empty (a fresh output root is a normal case) and
/// never contains the root itself. It is taken once per planning pass;
/// directories created by a later execution are deliberately not visible
/// until the next pass re-scans.
#[derive(Debug, Clone, Default)]
pub struct DirectoryInventory {
    dirs: Vec<RelativePath>,
}

impl DirectoryInventory {
    /// Snapshot every directory under `root`, as paths relative to it.
    ///
    /// A missing root yields an empty inventory, not an error. Unreadable
    /// subtrees and non-UTF-8 directory names are skipped. Symlinks are
    /// not followed.
    #[must_use]
    pub fn scan(root: &Path) -> Self {
        if !root.is_dir() {
            return Self::default();
        }
        let dirs = WalkDir::new(root)
            .min_depth(1)
            .into_iter()
            .filter_map(std::result::Result::ok)
            .filter(|entry| entry.file_type().is_dir())
            .filter_map(|entry| {
                let rel = entry.path().strip_prefix(root).ok()?;
                RelativePath::from_path(rel).ok()
            })
            .collect();
        Self::from_dirs(dirs)
    }

    /// Build an inventory from already-known relative paths, sorting and
    /// deduplicating them.
    #[must_use]
    pub fn from_dirs(mut dirs: Vec<RelativePath>) -> Self {
        dirs.sort();
        dirs.dedup();
        Self { dirs }
    }

    /// Whether the snapshot holds no directories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Number of directories in the snapshot.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dirs.len()
    }

    /// Whether the snapshot contains `dir`.
    #[must_use]
    pub fn contains(&self, dir: &RelativePath) -> bool {
        self.dirs.binary_search(dir).is_ok()
    }

    /// Iterate the snapshot in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &RelativePath> {
        self.dirs.iter()
    }
}

impl<'a> IntoIterator for &'a DirectoryInventory {
    type Item = &'a RelativePath;
    type IntoIter = std::slice::Iter<'a, RelativePath>;

    fn into_iter(self) -> Self::IntoIter {
        self.dirs.iter()
    }
}

/// Whether a path's basename starts with a dot.
///
/// # Examples
///
/// ```
/// use shelve::inventory::is_hidden;
/// use std::path::Path;
///
/// assert!(is_hidden(Path::new("/in/.DS_Store")));
/// assert!(!is_hidden(Path::new("/in/report.pdf")));
/// ```
#[must_use]
pub fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .and_then(|name| name.to_str())
        .is_some_and(|name| name.starts_with('.'))
}

/// Enumerate the source files of a planning pass.
///
/// A file input root yields a single-element list. A directory input root
/// yields every file under it recursively, sorted by path, skipping the
/// `exclude` subtree (callers pass the output root here when it nests
/// inside the input root, so already-organized files are not re-ingested).
/// Unreadable entries are skipped.
///
/// # Errors
///
/// Returns [`Error::MissingInput`] if `input_root` does not exist.
pub fn collect_source_files(input_root: &Path, exclude: Option<&Path>) -> Result<Vec<PathBuf>> {
    if !input_root.exists() {
        return Err(Error::MissingInput {
            path: input_root.to_path_buf(),
        });
    }
    if input_root.is_file() {
        return Ok(vec![input_root.to_path_buf()]);
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input_root)
        .into_iter()
        .filter_entry(|entry| exclude.map_or(true, |ex| entry.path() != ex))
        .filter_map(std::result::Result::ok)
        .filter(|entry| entry.file_type().is_file())
        .map(walkdir::DirEntry::into_path)
        .collect();
    files.sort();
    Ok(files)
}
