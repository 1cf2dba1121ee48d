//! Planning strategy that files everything by coarse file type.
//!
//! Extensions map to a fixed two-level category tree: images under
//! `image_files`, recognized documents under `text_files/{subtype}`,
//! and everything else under `others`. Hidden files are skipped
//! entirely by this strategy.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::inventory::{is_hidden, DirectoryInventory};
use crate::operations::plan::{OrganizePlan, PlanOptions, PlannedOperation};
use crate::path::RelativePath;
use crate::reconcile::reconcile;

/// Image extensions routed to `image_files`.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "bmp", "tiff"];

/// Document extensions routed under `text_files`.
const TEXT_EXTENSIONS: &[&str] = &[
    "txt", "md", "docx", "doc", "pdf", "xls", "xlsx", "epub", "mobi", "azw", "azw3",
];

/// Builds a by-type organizing plan.
///
/// # Examples
///
/// ```no_run
/// use shelve::operations::{PlanOptions, TypePlan};
/// use shelve::DirectoryInventory;
/// use std::path::PathBuf;
///
/// let files = vec![PathBuf::from("/in/report.pdf")];
/// let options = PlanOptions::new("/out");
/// let inventory = DirectoryInventory::scan(&options.output_root);
///
/// let plan = TypePlan::new(&files, &options).build_plan(&inventory).unwrap();
/// ```
pub struct TypePlan<'a> {
    files: &'a [PathBuf],
    options: &'a PlanOptions,
}

impl<'a> TypePlan<'a> {
    /// Creates a new by-type plan builder.
    #[must_use]
    pub const fn new(files: &'a [PathBuf], options: &'a PlanOptions) -> Self {
        Self { files, options }
    }

    /// Builds the plan, skipping hidden files.
    ///
    /// # Errors
    ///
    /// Returns an error if a category folder is not a valid relative
    /// path, which cannot happen for the fixed category names.
    pub fn build_plan(&self, inventory: &DirectoryInventory) -> Result<OrganizePlan> {
        let mut plan = OrganizePlan::new(format!(
            "organize {} files by type",
            self.files.len()
        ));

        for source in self.files {
            if is_hidden(source) {
                continue;
            }
            let Some(name) = source.file_name() else {
                plan = plan.add_warning(format!(
                    "Skipping '{}': no file name",
                    source.display()
                ));
                continue;
            };

            let desired = RelativePath::new(type_category(source))?;
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

/// Maps a file to its category folder by extension.
fn type_category(path: &Path) -> String {
    let ext = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    let ext = ext.as_str();

    if IMAGE_EXTENSIONS.contains(&ext) {
        return "image_files".to_string();
    }
    if TEXT_EXTENSIONS.contains(&ext) {
        let subtype = match ext {
            "txt" | "md" => "plain_text_files",
            "doc" | "docx" => "doc_files",
            "pdf" => "pdf_files",
            "xls" | "xlsx" => "xls_files",
            "epub" | "mobi" | "azw" | "azw3" => "ebooks",
            _ => "others",
        };
        return format!("text_files/{subtype}");
    }
    "others".to_string()
}
