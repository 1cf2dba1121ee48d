//! Planning strategy that files everything by modification date.
//!
//! Each file lands in a `{year}/{month name}` folder derived from its
//! filesystem modification timestamp, reconciled against the existing
//! output tree. Filenames are kept as-is.

use std::fs;
use std::time::SystemTime;

use chrono::{DateTime, Local};
use std::path::PathBuf;

use crate::error::Result;
use crate::inventory::DirectoryInventory;
use crate::operations::plan::{OrganizePlan, PlanOptions, PlannedOperation};
use crate::path::RelativePath;
use crate::reconcile::reconcile;

/// Builds a by-date organizing plan.
///
/// # Examples
///
/// ```no_run
/// use shelve::operations::{DatePlan, PlanOptions};
/// use shelve::DirectoryInventory;
/// use std::path::PathBuf;
///
/// let files = vec![PathBuf::from("/in/report.pdf")];
/// let options = PlanOptions::new("/out");
/// let inventory = DirectoryInventory::scan(&options.output_root);
///
/// let plan = DatePlan::new(&files, &options).build_plan(&inventory).unwrap();
/// ```
pub struct DatePlan<'a> {
    files: &'a [PathBuf],
    options: &'a PlanOptions,
}

impl<'a> DatePlan<'a> {
    /// Creates a new by-date plan builder.
    #[must_use]
    pub const fn new(files: &'a [PathBuf], options: &'a PlanOptions) -> Self {
        Self { files, options }
    }

    /// Builds the plan.
    ///
    /// Files whose modification time cannot be read are skipped with a
    /// warning; the caller's safety net picks them up.
    ///
    /// # Errors
    ///
    /// Returns an error if a derived destination folder is not a valid
    /// relative path, which cannot happen for year/month names.
    pub fn build_plan(&self, inventory: &DirectoryInventory) -> Result<OrganizePlan> {
        let mut plan = OrganizePlan::new(format!(
            "organize {} files by modification date",
            self.files.len()
        ));

        for source in self.files {
            let modified = match fs::metadata(source).and_then(|meta| meta.modified()) {
                Ok(time) => time,
                Err(err) => {
                    plan = plan.add_warning(format!(
                        "Skipping '{}': cannot read modification time ({err})",
                        source.display()
                    ));
                    continue;
                }
            };
            let Some(name) = source.file_name() else {
                plan = plan.add_warning(format!(
                    "Skipping '{}': no file name",
                    source.display()
                ));
                continue;
            };

            let desired = date_folder(modified)?;
            let mapped = reconcile(
                &self.options.output_root,
                &desired,
                inventory,
                self.options.reuse_threshold,
            );
            let destination = mapped.resolve(&self.options.output_root).join(name);

            plan = plan.add_operation(PlannedOperation {
                source: source.clone(),
                destination,
                link_type: self.options.link_type,
                metadata: None,
            });
        }

        Ok(plan)
    }
}

/// Maps a modification time to its `{year}/{full month name}` folder,
/// in local time.
fn date_folder(modified: SystemTime) -> Result<RelativePath> {
    let local: DateTime<Local> = modified.into();
    Ok(RelativePath::new(local.format("%Y/%B").to_string())?)
}
