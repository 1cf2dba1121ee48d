//! Slash-normalized destination paths relative to the output root.

use std::fmt;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

/// A destination subdirectory path relative to the output root.
///
/// The path is stored slash-separated regardless of platform and is
/// guaranteed non-empty and free of `.`/`..` components. It may name a
/// directory that does not exist yet; existence is the reconciler's
/// concern, not this type's.
///
/// Ordering is lexicographic on the normalized string, so collections of
/// relative paths sort the same way on every platform.
///
/// # Examples
///
/// ```
/// use shelve::path::RelativePath;
///
/// let rel = RelativePath::new("image_files").unwrap();
/// assert_eq!(rel.as_str(), "image_files");
///
/// assert!(RelativePath::new("").is_err());
/// assert!(RelativePath::new("../outside").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct RelativePath {
    value: String,
}

impl RelativePath {
    /// Create a relative path from a string, normalizing separators.
    ///
    /// Backslashes are treated as separators, runs of separators collapse,
    /// and `.` segments are dropped. Leading and trailing separators are
    /// ignored.
    ///
    /// # Errors
    ///
    /// Returns an error if the path is empty after normalization or if any
    /// segment is `..` (the output root must never be escaped).
    pub fn new(value: impl AsRef<str>) -> Result<Self, RelativePathError> {
        let raw = value.as_ref();
        let mut segments = Vec::new();
        for segment in raw.replace('\\', "/").split('/') {
            if segment.is_empty() || segment == "." {
                continue;
            }
            if segment == ".." {
                return Err(RelativePathError {
                    value: raw.to_string(),
                    reason: "path traversal ('..') is not allowed".to_string(),
                });
            }
            segments.push(segment.to_string());
        }
        if segments.is_empty() {
            return Err(RelativePathError {
                value: raw.to_string(),
                reason: "must name at least one directory".to_string(),
            });
        }
        Ok(Self {
            value: segments.join("/"),
        })
    }

    /// Create a relative path from a filesystem path (e.g. the suffix of a
    /// directory walk).
    ///
    /// # Errors
    ///
    /// Returns an error if the path is absolute, empty, contains `..`, or
    /// holds non-UTF-8 segments.
    pub fn from_path(path: &Path) -> Result<Self, RelativePathError> {
        let mut segments = Vec::new();
        for component in path.components() {
            match component {
                Component::Normal(os) => {
                    let segment = os.to_str().ok_or_else(|| RelativePathError {
                        value: path.display().to_string(),
                        reason: "segment contains invalid UTF-8".to_string(),
                    })?;
                    segments.push(segment);
                }
                Component::CurDir => {}
                Component::ParentDir => {
                    return Err(RelativePathError {
                        value: path.display().to_string(),
                        reason: "path traversal ('..') is not allowed".to_string(),
                    });
                }
                Component::RootDir | Component::Prefix(_) => {
                    return Err(RelativePathError {
                        value: path.display().to_string(),
                        reason: "must be relative, not absolute".to_string(),
                    });
                }
            }
        }
        Self::new(segments.join("/"))
    }

    /// The normalized slash-separated path string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.value
    }

    /// Iterate over the path's segments, outermost first.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.value.split('/')
    }

    /// Join this relative path onto an absolute root directory.
    ///
    /// # Examples
    ///
    /// ```
    /// use shelve::path::RelativePath;
    /// use std::path::Path;
    ///
    /// let rel = RelativePath::new("2024/March").unwrap();
    /// let dest = rel.resolve(Path::new("/out"));
    /// assert_eq!(dest, Path::new("/out/2024/March"));
    /// ```
    #[must_use]
    pub fn resolve(&self, root: &Path) -> PathBuf {
        let mut resolved = root.to_path_buf();
        for segment in self.segments() {
            resolved.push(segment);
        }
        resolved
    }
}

impl fmt::Display for RelativePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl AsRef<str> for RelativePath {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

/// Error type for relative path construction failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelativePathError {
    /// The offending path value.
    pub value: String,
    /// A description of the constraint that was violated.
    pub reason: String,
}

impl fmt::Display for RelativePathError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid relative path '{}': {}", self.value, self.reason)
    }
}

impl std::error::Error for RelativePathError {}
