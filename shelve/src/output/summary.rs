//! Summary counts for an organizing plan.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::operations::{LinkType, OrganizePlan};

/// Per-folder and per-extension counts for a plan, plus the number of
/// bytes the planned plain copies will duplicate.
///
/// Sorted maps keep the rendering deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanSummary {
    /// Number of planned operations.
    pub total_operations: usize,
    /// Destination folder (relative to the output root) to file count.
    pub folders: BTreeMap<String, usize>,
    /// Destination extension (lowercased, with leading dot) to file
    /// count; extensionless files count under `(none)`.
    pub extensions: BTreeMap<String, usize>,
    /// Total size of source files planned as plain copies. Links do
    /// not duplicate bytes, so they are not counted.
    pub copy_bytes: u64,
}

impl PlanSummary {
    /// Computes the summary for a plan.
    ///
    /// Source sizes are read from disk for copy operations; unreadable
    /// sources simply contribute zero bytes.
    #[must_use]
    pub fn from_plan(plan: &OrganizePlan, output_root: &Path) -> Self {
        let mut folders: BTreeMap<String, usize> = BTreeMap::new();
        let mut extensions: BTreeMap<String, usize> = BTreeMap::new();
        let mut copy_bytes = 0u64;

        for operation in plan.operations() {
            let folder = operation
                .destination
                .parent()
                .map_or_else(String::new, |parent| relative_name(parent, output_root));
            *folders.entry(folder).or_insert(0) += 1;

            let extension = operation
                .destination
                .extension()
                .and_then(|ext| ext.to_str())
                .map_or_else(|| "(none)".to_string(), |ext| format!(".{}", ext.to_lowercase()));
            *extensions.entry(extension).or_insert(0) += 1;

            if operation.link_type == LinkType::Copy {
                if let Ok(meta) = fs::metadata(&operation.source) {
                    copy_bytes += meta.len();
                }
            }
        }

        Self {
            total_operations: plan.len(),
            folders,
            extensions,
            copy_bytes,
        }
    }

    /// Renders the summary as human-readable text.
    #[must_use]
    pub fn render(&self) -> String {
        let mut lines = vec![format!(
            "Planned {} operations into {} folders",
            self.total_operations,
            self.folders.len()
        )];

        lines.push("Folders:".to_string());
        for (folder, count) in &self.folders {
            lines.push(format!("  {folder}: {count}"));
        }

        lines.push("Extensions:".to_string());
        for (extension, count) in &self.extensions {
            lines.push(format!("  {extension}: {count}"));
        }

        lines.push(format!("Bytes to copy: {}", self.copy_bytes));
        lines.join("\n")
    }
}

fn relative_name(path: &Path, output_root: &Path) -> String {
    let rel = path.strip_prefix(output_root).unwrap_or(path);
    let parts: Vec<String> = rel
        .components()
        .map(|component| component.as_os_str().to_string_lossy().into_owned())
        .collect();
    parts.join("/")
}
