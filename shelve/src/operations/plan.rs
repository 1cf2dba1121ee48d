//! Plan types for file-organizing operations.
//!
//! A plan is an ordered list of [`PlannedOperation`]s produced by one of
//! the planning strategies, plus any warnings collected while planning.
//! Plans are immutable once handed to the executor: the executor only
//! reports on operations, it never rewrites them.

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::path::RelativePath;
use crate::reconcile::DEFAULT_REUSE_THRESHOLD;

/// The filesystem linking strategy for a single operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkType {
    /// Create a hard link to the source file.
    Hardlink,
    /// Create a symbolic link to the source file.
    Symlink,
    /// Copy the file contents.
    Copy,
}

impl fmt::Display for LinkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hardlink => write!(f, "hardlink"),
            Self::Symlink => write!(f, "symlink"),
            Self::Copy => write!(f, "copy"),
        }
    }
}

/// Classification provenance carried on an operation for observability.
///
/// Present only for operations produced by the classification strategy.
/// `original_folder` is the folder name exactly as the metadata supplied
/// it, before reconciliation mapped it onto `mapped_folder`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OperationMetadata {
    /// Folder name as supplied by the classification metadata.
    pub original_folder: String,
    /// Folder the reconciler actually chose.
    pub mapped_folder: RelativePath,
    /// Final destination filename after collision suffixing.
    pub new_file_name: String,
}

/// A single planned file operation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlannedOperation {
    /// Absolute path of the source file.
    pub source: PathBuf,
    /// Absolute path the file will be materialized at.
    pub destination: PathBuf,
    /// How the file is materialized.
    pub link_type: LinkType,
    /// Classification provenance, when the classification strategy
    /// produced this operation.
    pub metadata: Option<OperationMetadata>,
}

impl PlannedOperation {
    /// Returns a human-readable description of the operation.
    #[must_use]
    pub fn description(&self) -> String {
        format!(
            "{} '{}' -> '{}'",
            self.link_type,
            self.source.display(),
            self.destination.display()
        )
    }
}

/// An ordered plan of file operations with accumulated warnings.
///
/// # Examples
///
/// ```
/// use shelve::operations::{LinkType, OrganizePlan, PlannedOperation};
/// use std::path::PathBuf;
///
/// let plan = OrganizePlan::new("organize 1 file")
///     .add_operation(PlannedOperation {
///         source: PathBuf::from("/in/a.txt"),
///         destination: PathBuf::from("/out/text_files/plain_text_files/a.txt"),
///         link_type: LinkType::Hardlink,
///         metadata: None,
///     })
///     .add_warning("something to know");
///
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan.warnings().len(), 1);
/// ```
#[derive(Debug, Clone, Serialize)]
pub struct OrganizePlan {
    description: String,
    operations: Vec<PlannedOperation>,
    warnings: Vec<String>,
}

impl OrganizePlan {
    /// Creates an empty plan with a description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            operations: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Appends an operation to the plan.
    #[must_use]
    pub fn add_operation(mut self, operation: PlannedOperation) -> Self {
        self.operations.push(operation);
        self
    }

    /// Appends a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Appends all operations and warnings from another plan.
    ///
    /// Used to fold the unclassified safety net into a strategy's plan
    /// so that a single execution pass covers both.
    #[must_use]
    pub fn merge(mut self, other: Self) -> Self {
        self.operations.extend(other.operations);
        self.warnings.extend(other.warnings);
        self
    }

    /// Returns the plan description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the planned operations in emission order.
    #[must_use]
    pub fn operations(&self) -> &[PlannedOperation] {
        &self.operations
    }

    /// Returns the warnings collected during planning.
    #[must_use]
    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Returns true if the plan contains no operations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operations.is_empty()
    }

    /// Returns the number of planned operations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.operations.len()
    }
}

/// Settings shared by every planning strategy.
#[derive(Debug, Clone)]
pub struct PlanOptions {
    /// Root directory the organized tree is built under.
    pub output_root: PathBuf,
    /// Link type to plan for every operation.
    pub link_type: LinkType,
    /// Similarity threshold for reusing an existing directory.
    pub reuse_threshold: f64,
}

impl PlanOptions {
    /// Creates options with the default link type (hardlink) and
    /// reuse threshold.
    #[must_use]
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
            link_type: LinkType::Hardlink,
            reuse_threshold: DEFAULT_REUSE_THRESHOLD,
        }
    }

    /// Sets the link type.
    #[must_use]
    pub const fn with_link_type(mut self, link_type: LinkType) -> Self {
        self.link_type = link_type;
        self
    }

    /// Sets the directory-reuse threshold.
    #[must_use]
    pub const fn with_reuse_threshold(mut self, threshold: f64) -> Self {
        self.reuse_threshold = threshold;
        self
    }
}
