#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # shelve
//!
//! A library for planning and executing file organization runs.
//!
//! This library provides core types and functionality for scanning a
//! directory of unsorted files, planning where each file should land in an
//! organized output tree, and materializing the plan with links or copies.
//!
//! ## Core Types
//!
//! - [`RelativePath`] and [`DirectoryInventory`]: Destination folders and
//!   what already exists under the output root
//! - [`OrganizePlan`] and [`PlannedOperation`]: Planned filesystem work
//! - [`PlanExecutor`] and [`ExecutionReport`]: Plan materialization
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`], [`LogLevel`], and [`RunLog`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use shelve::{LinkType, OrganizePlan, PlannedOperation};
//!
//! let plan = OrganizePlan::new("organize by type").add_operation(PlannedOperation {
//!     source: "/in/a.txt".into(),
//!     destination: "/out/text_files/plain_text_files/a.txt".into(),
//!     link_type: LinkType::Hardlink,
//!     metadata: None,
//! });
//! assert_eq!(plan.len(), 1);
//! ```

pub mod config;
pub mod error;
pub mod inventory;
pub mod logging;
pub mod operations;
pub mod output;
pub mod path;
pub mod reconcile;
pub mod sanitize;
pub mod similarity;

// Re-export key types at crate root for convenience
pub use config::{Config, LinkMode};
pub use error::{Error, Result};
pub use inventory::{collect_source_files, is_hidden, DirectoryInventory};
pub use logging::{init_logger, LogLevel, Logger, RunLog};
pub use operations::{
    plan_unclassified, ClassificationRecord, ClassifyPlan, DatePlan, ExecutionReport, LinkType,
    OrganizePlan, PlanExecutor, PlanOptions, PlannedOperation, TypePlan,
};
pub use output::{PlanFormatter, PlanSummary, PreviewFormat};
pub use path::RelativePath;
pub use reconcile::{reconcile, DEFAULT_REUSE_THRESHOLD};
pub use similarity::similarity_score;
