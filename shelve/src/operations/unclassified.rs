//! Safety net for files no strategy routed anywhere.
//!
//! Any non-hidden input file that is not covered by a plan gets an
//! unconditional copy into a fixed `unclassified` folder, so that no
//! file is ever silently dropped from a run.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::inventory::is_hidden;
use crate::operations::plan::{LinkType, OrganizePlan, PlannedOperation};

/// Folder under the output root that uncovered files are copied into.
pub const UNCLASSIFIED_FOLDER: &str = "unclassified";

/// Plans an unconditional copy for every non-hidden input file that the
/// given plan does not already cover.
///
/// The copies keep their original filenames and always use
/// [`LinkType::Copy`], regardless of the link type the covered
/// operations were planned with. Each planned copy is announced with a
/// warning so the operator can see what fell through classification.
///
/// # Examples
///
/// ```
/// use shelve::operations::{plan_unclassified, OrganizePlan};
/// use std::path::{Path, PathBuf};
///
/// let files = vec![PathBuf::from("/in/mystery.bin")];
/// let covered = OrganizePlan::new("empty");
/// let net = plan_unclassified(&files, &covered, Path::new("/out"));
///
/// assert_eq!(net.len(), 1);
/// assert_eq!(
///     net.operations()[0].destination,
///     PathBuf::from("/out/unclassified/mystery.bin")
/// );
/// ```
#[must_use]
pub fn plan_unclassified(
    files: &[PathBuf],
    planned: &OrganizePlan,
    output_root: &Path,
) -> OrganizePlan {
    let covered: HashSet<&Path> = planned
        .operations()
        .iter()
        .map(|op| op.source.as_path())
        .collect();
    let folder = output_root.join(UNCLASSIFIED_FOLDER);

    let mut net = OrganizePlan::new("copy unrouted files into 'unclassified'");
    for source in files {
        if is_hidden(source) || covered.contains(source.as_path()) {
            continue;
        }
        let Some(name) = source.file_name() else {
            continue;
        };
        net = net.add_warning(format!(
            "File '{}' will be copied as-is to '{}' without classification or renaming.",
            source.display(),
            folder.display()
        ));
        net = net.add_operation(PlannedOperation {
            source: source.clone(),
            destination: folder.join(name),
            link_type: LinkType::Copy,
            metadata: None,
        });
    }
    net
}
