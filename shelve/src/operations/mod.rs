//! File-organizing operations using the plan-execute pattern.
//!
//! This module provides a plan-execute pattern for organizing files,
//! separating planning from execution to enable dry-run mode, better
//! testing, and clear per-operation reporting.
//!
//! # Architecture
//!
//! Operations are split into two phases:
//! 1. **Planning**: a strategy turns source files (plus, for the
//!    classification strategy, per-file metadata) into an ordered
//!    [`OrganizePlan`], reconciling destination folders against the
//!    existing output tree and de-duplicating destination filenames.
//! 2. **Execution**: [`PlanExecutor`] materializes the plan with a
//!    link-then-copy fallback, or previews it in dry-run mode.
//!
//! # Examples
//!
//! ```no_run
//! use shelve::operations::{DatePlan, PlanExecutor, PlanOptions};
//! use shelve::{DirectoryInventory, RunLog};
//! use std::path::PathBuf;
//!
//! let files = vec![PathBuf::from("/in/report.pdf")];
//! let options = PlanOptions::new("/out");
//! let inventory = DirectoryInventory::scan(&options.output_root);
//!
//! // Generate plan
//! let plan = DatePlan::new(&files, &options).build_plan(&inventory).unwrap();
//!
//! // Execute plan
//! let mut log = RunLog::console();
//! let report = PlanExecutor::new(&mut log).execute(&plan);
//! assert!(report.all_succeeded());
//! ```

pub mod by_date;
pub mod by_type;
pub mod classify;
pub mod executor;
pub mod plan;
pub mod unclassified;

#[cfg(test)]
mod proptests;

pub use by_date::DatePlan;
pub use by_type::TypePlan;
pub use classify::{load_classification_records, ClassificationRecord, ClassifyPlan};
pub use executor::{ExecutionReport, PlanExecutor};
pub use plan::{LinkType, OperationMetadata, OrganizePlan, PlanOptions, PlannedOperation};
pub use unclassified::{plan_unclassified, UNCLASSIFIED_FOLDER};
