//! Path handling for destination directories and user-supplied roots.
//!
//! This module provides the two path notions the planner works with:
//!
//! # Relative destination paths
//!
//! A [`RelativePath`] is a slash-normalized path relative to the output
//! root, naming a destination subdirectory that may or may not exist yet.
//! Construction enforces the invariants the reconciler relies on: never
//! empty, never escaping the root via `..`, always `/`-separated
//! regardless of platform. Relative paths order lexicographically, which
//! is what makes inventory snapshots (and therefore reconciliation
//! tie-breaks) deterministic.
//!
//! # Root resolution
//!
//! User-supplied input and output roots arrive as arbitrary strings that
//! may start with `~` or be relative to the working directory.
//! [`resolve_root`] turns them into absolute paths without touching the
//! filesystem beyond what tilde expansion requires.
//!
//! # Examples
//!
//! ```
//! use shelve::path::RelativePath;
//! use std::path::Path;
//!
//! let rel = RelativePath::new("2024/January").unwrap();
//! assert_eq!(rel.as_str(), "2024/January");
//! assert_eq!(rel.resolve(Path::new("/out")), Path::new("/out/2024/January"));
//!
//! // Backslashes and redundant separators are normalized away
//! let rel = RelativePath::new("text_files\\pdf_files//").unwrap();
//! assert_eq!(rel.as_str(), "text_files/pdf_files");
//! ```

pub mod relative;
pub mod resolve;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relative::{RelativePath, RelativePathError};
pub use resolve::{expand_tilde, resolve_root};
