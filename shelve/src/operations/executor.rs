//! Executes an organizing plan against the filesystem.
//!
//! Operations run strictly in plan order. Every outcome, preview,
//! link, copy, fallback, or failure, is recorded as exactly one line
//! on the run log with an `[N/total]` progress prefix. A failing
//! operation never aborts the batch.

use std::fs;
use std::io;
use std::path::Path;

use crate::logging::RunLog;
use crate::operations::plan::{LinkType, OrganizePlan, PlannedOperation};

/// Outcome counters for one execution pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExecutionReport {
    /// Number of operations in the plan.
    pub total: usize,
    /// Links created with their declared link type.
    pub linked: usize,
    /// Files copied because the plan asked for a copy.
    pub copied: usize,
    /// Files copied because link creation failed.
    pub fallback_copies: usize,
    /// Operations that produced no file at all.
    pub failed: usize,
    /// Operations previewed in dry-run mode.
    pub previewed: usize,
    /// True if this pass was a dry run.
    pub dry_run: bool,
}

impl ExecutionReport {
    const fn new(total: usize, dry_run: bool) -> Self {
        Self {
            total,
            linked: 0,
            copied: 0,
            fallback_copies: 0,
            failed: 0,
            previewed: 0,
            dry_run,
        }
    }

    /// Number of operations that materialized a file.
    #[must_use]
    pub const fn completed(&self) -> usize {
        self.linked + self.copied + self.fallback_copies
    }

    /// True if no operation failed.
    #[must_use]
    pub const fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

enum Outcome {
    Linked,
    Copied,
    FallbackCopied,
    Failed,
}

/// Executes plans, either for real or in dry-run mode.
///
/// # Examples
///
/// ```
/// use shelve::operations::{OrganizePlan, PlanExecutor};
/// use shelve::RunLog;
///
/// let mut log = RunLog::console();
/// let plan = OrganizePlan::new("nothing to do");
///
/// let report = PlanExecutor::new(&mut log).dry_run().execute(&plan);
/// assert_eq!(report.total, 0);
/// ```
pub struct PlanExecutor<'a> {
    log: &'a mut RunLog,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates an executor recording onto the given run log.
    #[must_use]
    pub const fn new(log: &'a mut RunLog) -> Self {
        Self {
            log,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    ///
    /// In dry-run mode every operation is previewed on the run log and
    /// nothing on disk is touched.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the plan's operations in order.
    ///
    /// Per-operation errors are recorded on the run log and counted in
    /// the report; they never abort the remaining operations.
    pub fn execute(&mut self, plan: &OrganizePlan) -> ExecutionReport {
        let total = plan.len();
        let mut report = ExecutionReport::new(total, self.dry_run);

        for (index, operation) in plan.operations().iter().enumerate() {
            let seq = index + 1;
            if self.dry_run {
                self.log.record(&format!(
                    "[{seq}/{total}] Dry run: would create {} from '{}' to '{}'",
                    operation.link_type,
                    operation.source.display(),
                    operation.destination.display()
                ));
                report.previewed += 1;
                continue;
            }
            match self.execute_operation(seq, total, operation) {
                Outcome::Linked => report.linked += 1,
                Outcome::Copied => report.copied += 1,
                Outcome::FallbackCopied => report.fallback_copies += 1,
                Outcome::Failed => report.failed += 1,
            }
        }

        report
    }

    fn execute_operation(
        &mut self,
        seq: usize,
        total: usize,
        operation: &PlannedOperation,
    ) -> Outcome {
        let source = operation.source.display();
        let destination = operation.destination.display();

        if let Some(parent) = operation.destination.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                self.log.record(&format!(
                    "[{seq}/{total}] Error creating directory for '{destination}': {err}"
                ));
                return Outcome::Failed;
            }
        }

        let link_result = match operation.link_type {
            LinkType::Copy => {
                return match fs::copy(&operation.source, &operation.destination) {
                    Ok(_) => {
                        self.log.record(&format!(
                            "[{seq}/{total}] Copied file from '{source}' to '{destination}'"
                        ));
                        Outcome::Copied
                    }
                    Err(err) => {
                        self.log.record(&format!(
                            "[{seq}/{total}] Error saving file to '{destination}': {err}"
                        ));
                        Outcome::Failed
                    }
                };
            }
            LinkType::Hardlink => fs::hard_link(&operation.source, &operation.destination),
            LinkType::Symlink => create_symlink(&operation.source, &operation.destination),
        };

        match link_result {
            Ok(()) => {
                self.log.record(&format!(
                    "[{seq}/{total}] Created {} from '{source}' to '{destination}'",
                    operation.link_type
                ));
                Outcome::Linked
            }
            Err(link_err) => match fs::copy(&operation.source, &operation.destination) {
                Ok(_) => {
                    self.log.record(&format!(
                        "[{seq}/{total}] Link failed ({link_err}); copied file from \
                         '{source}' to '{destination}' instead"
                    ));
                    Outcome::FallbackCopied
                }
                Err(copy_err) => {
                    self.log.record(&format!(
                        "[{seq}/{total}] Error saving file to '{destination}': {copy_err} \
                         (original link error: {link_err})"
                    ));
                    Outcome::Failed
                }
            },
        }
    }
}

#[cfg(unix)]
fn create_symlink(source: &Path, destination: &Path) -> io::Result<()> {
    std::os::unix::fs::symlink(source, destination)
}

#[cfg(windows)]
fn create_symlink(source: &Path, destination: &Path) -> io::Result<()> {
    std::os::windows::fs::symlink_file(source, destination)
}
