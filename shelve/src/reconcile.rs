//! Reconciliation of desired destination folders against existing ones.
//!
//! Repeated runs over the same output root should converge on one set of
//! folders instead of spawning near-duplicates (`2024/January` on the first
//! run, `2024/Jan` on the second). The reconciler maps a desired relative
//! destination onto an existing directory when the two are similar enough,
//! and otherwise leaves the desired path untouched for the executor to
//! create.
//!
//! Reuse occasionally merges two folders a user meant to keep distinct;
//! that false-positive risk is the accepted cost, controlled by the
//! threshold.
//!
//! # Examples
//!
//! ```
//! use shelve::inventory::DirectoryInventory;
//! use shelve::path::RelativePath;
//! use shelve::reconcile::{reconcile, DEFAULT_REUSE_THRESHOLD};
//! use std::path::Path;
//!
//! let inventory = DirectoryInventory::from_dirs(vec![
//!     RelativePath::new("2024/January").unwrap(),
//! ]);
//! let desired = RelativePath::new("2024/Jan").unwrap();
//! let chosen = reconcile(
//!     Path::new("/no/such/root"),
//!     &desired,
//!     &inventory,
//!     DEFAULT_REUSE_THRESHOLD,
//! );
//! assert_eq!(chosen.as_str(), "2024/January");
//! ```

use std::path::Path;

use crate::inventory::DirectoryInventory;
use crate::path::RelativePath;
use crate::similarity::similarity_score;

/// Default similarity score at or above which an existing directory is
/// reused. An empirical constant; override it through configuration when a
/// run needs to merge more or less aggressively.
pub const DEFAULT_REUSE_THRESHOLD: f64 = 0.62;

/// Decide which directory a desired destination should land in.
///
/// Policy, in order:
/// 1. If the desired directory already exists under `output_root`, keep it
///    (exact reuse, no scoring).
/// 2. If the inventory is empty, keep the desired path (nothing to reuse).
/// 3. Otherwise score every candidate and take the strictly greatest score;
///    equal scores resolve to the earliest candidate in the inventory's
///    sorted order.
/// 4. Reuse the best candidate if its score is at least `threshold`,
///    otherwise keep the desired path.
///
/// The inventory is the caller's snapshot for the whole planning pass; this
/// function performs a single existence check and no other I/O.
#[must_use]
pub fn reconcile(
    output_root: &Path,
    desired: &RelativePath,
    inventory: &DirectoryInventory,
    threshold: f64,
) -> RelativePath {
    if desired.resolve(output_root).is_dir() {
        return desired.clone();
    }
    if inventory.is_empty() {
        return desired.clone();
    }

    let mut best: Option<(&RelativePath, f64)> = None;
    for candidate in inventory {
        let score = similarity_score(desired.as_str(), candidate.as_str());
        let improves = match best {
            Some((_, best_score)) => score > best_score,
            None => true,
        };
        if improves {
            best = Some((candidate, score));
        }
    }

    match best {
        Some((candidate, score)) if score >= threshold => {
            log::debug!(
                "reusing existing directory '{candidate}' for desired '{desired}' (score {score:.3})"
            );
            candidate.clone()
        }
        _ => desired.clone(),
    }
}

/// [`reconcile`] with a snapshot taken on the spot.
///
/// Planning passes should scan once and call [`reconcile`] per folder;
/// this variant serves one-off callers that have no snapshot to share.
#[must_use]
pub fn reconcile_fresh(output_root: &Path, desired: &RelativePath, threshold: f64) -> RelativePath {
    let inventory = DirectoryInventory::scan(output_root);
    reconcile(output_root, desired, &inventory, threshold)
}
