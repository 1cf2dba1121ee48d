//! Planning strategy driven by external classification metadata.
//!
//! Each record names a source file plus a suggested folder and file
//! name, typically produced by an inference pipeline and already passed
//! through the name sanitizer. Folder names are reconciled against the
//! existing output tree; destination filenames are de-duplicated with a
//! counter suffix within one planning pass.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::inventory::DirectoryInventory;
use crate::operations::plan::{OperationMetadata, OrganizePlan, PlanOptions, PlannedOperation};
use crate::path::RelativePath;
use crate::reconcile::reconcile;
use crate::sanitize::sanitize_label;

/// One classification result for one source file.
///
/// `foldername` and `filename` are trusted to be sanitized by their
/// producer; the planner only guards against values that cannot form a
/// destination path at all.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationRecord {
    /// Absolute path of the classified source file.
    pub file_path: PathBuf,
    /// Suggested destination folder, relative to the output root.
    pub foldername: String,
    /// Suggested destination filename, without extension.
    pub filename: String,
}

/// Loads classification records from a JSON array file.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not a JSON array
/// of records.
pub fn load_classification_records(path: &Path) -> Result<Vec<ClassificationRecord>> {
    let contents = fs::read_to_string(path)?;
    let records = serde_json::from_str(&contents)?;
    Ok(records)
}

/// Builds an organizing plan from classification records.
///
/// # Examples
///
/// ```no_run
/// use shelve::operations::{ClassificationRecord, ClassifyPlan, PlanOptions};
/// use shelve::DirectoryInventory;
/// use std::path::PathBuf;
///
/// let records = vec![ClassificationRecord {
///     file_path: PathBuf::from("/in/scan0001.pdf"),
///     foldername: "invoices".to_string(),
///     filename: "acme_march_invoice".to_string(),
/// }];
/// let options = PlanOptions::new("/out");
/// let inventory = DirectoryInventory::scan(&options.output_root);
///
/// let plan = ClassifyPlan::new(&records, &options).build_plan(&inventory).unwrap();
/// ```
pub struct ClassifyPlan<'a> {
    records: &'a [ClassificationRecord],
    options: &'a PlanOptions,
}

impl<'a> ClassifyPlan<'a> {
    /// Creates a new classification plan builder.
    #[must_use]
    pub const fn new(records: &'a [ClassificationRecord], options: &'a PlanOptions) -> Self {
        Self { records, options }
    }

    /// Builds the plan.
    ///
    /// Records are processed in order. A source file appearing in more
    /// than one record is planned only once; colliding destination
    /// filenames get a `_{n}` suffix starting at 1.
    ///
    /// # Errors
    ///
    /// Returns an error if a folder name cannot be turned into a valid
    /// relative path even after sanitizing.
    pub fn build_plan(&self, inventory: &DirectoryInventory) -> Result<OrganizePlan> {
        let mut plan = OrganizePlan::new(format!(
            "organize {} classified files",
            self.records.len()
        ));
        let mut renamed: HashSet<PathBuf> = HashSet::new();
        let mut processed: HashSet<&Path> = HashSet::new();

        for record in self.records {
            if !processed.insert(record.file_path.as_path()) {
                continue;
            }

            let desired = match RelativePath::new(&record.foldername) {
                Ok(path) => path,
                Err(_) => RelativePath::new(sanitize_label(&record.foldername))?,
            };
            let mapped = reconcile(
                &self.options.output_root,
                &desired,
                inventory,
                self.options.reuse_threshold,
            );
            let folder = mapped.resolve(&self.options.output_root);

            let stem = if record.filename.trim().is_empty() {
                sanitize_label(&record.filename)
            } else {
                record.filename.clone()
            };
            let extension = record
                .file_path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_string);

            let mut file_name = join_name(&stem, extension.as_deref());
            let mut destination = folder.join(&file_name);
            let mut counter = 0usize;
            while renamed.contains(&destination) {
                counter += 1;
                file_name = join_name(&format!("{stem}_{counter}"), extension.as_deref());
                destination = folder.join(&file_name);
            }
            renamed.insert(destination.clone());

            plan = plan.add_operation(PlannedOperation {
                source: record.file_path.clone(),
                destination,
                link_type: self.options.link_type,
                metadata: Some(OperationMetadata {
                    original_folder: record.foldername.clone(),
                    mapped_folder: mapped,
                    new_file_name: file_name,
                }),
            });
        }

        Ok(plan)
    }
}

fn join_name(stem: &str, extension: Option<&str>) -> String {
    match extension {
        Some(ext) => format!("{stem}.{ext}"),
        None => stem.to_string(),
    }
}
