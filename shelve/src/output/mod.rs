//! Output formatting module for organizing plans.
//!
//! This module renders a plan before committal: a simulated destination
//! tree plus per-folder and per-extension summary counts, either as
//! human-readable text or as JSON.

mod summary;
mod tree;

use std::path::{Path, PathBuf};

use crate::operations::OrganizePlan;
use crate::{Error, Result};

pub use summary::PlanSummary;
pub use tree::render_tree;

/// Trait for formatting an organizing plan into a preview string.
pub trait PlanFormatter {
    /// Format the given plan into a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the formatting fails (e.g., JSON serialization).
    fn format(&self, plan: &OrganizePlan) -> Result<String>;
}

/// Available preview formats for an organizing plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewFormat {
    /// Simulated destination tree plus summary counts.
    Human,
    /// JSON document with operations, warnings, and summary.
    Json,
}

impl PreviewFormat {
    /// Create a formatter for this preview format.
    ///
    /// # Arguments
    ///
    /// * `output_root` - Root the plan's destinations live under; used
    ///   to render destination paths relative to it.
    #[must_use]
    pub fn create_formatter(&self, output_root: &Path) -> Box<dyn PlanFormatter> {
        match self {
            Self::Human => Box::new(HumanFormatter::new(output_root)),
            Self::Json => Box::new(JsonFormatter::new(output_root)),
        }
    }
}

/// Formatter for human-readable previews.
pub struct HumanFormatter {
    output_root: PathBuf,
}

impl HumanFormatter {
    /// Create a new human-readable formatter.
    #[must_use]
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }
}

impl PlanFormatter for HumanFormatter {
    fn format(&self, plan: &OrganizePlan) -> Result<String> {
        if plan.is_empty() {
            return Ok("No operations planned.".to_string());
        }

        let tree = render_tree(plan, &self.output_root);
        let summary = PlanSummary::from_plan(plan, &self.output_root);
        Ok(format!("{tree}\n\n{}", summary.render()))
    }
}

/// Formatter for JSON output.
pub struct JsonFormatter {
    output_root: PathBuf,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    #[must_use]
    pub fn new(output_root: impl Into<PathBuf>) -> Self {
        Self {
            output_root: output_root.into(),
        }
    }
}

impl PlanFormatter for JsonFormatter {
    fn format(&self, plan: &OrganizePlan) -> Result<String> {
        let summary = PlanSummary::from_plan(plan, &self.output_root);
        let document = serde_json::json!({
            "description": plan.description(),
            "operations": plan.operations(),
            "warnings": plan.warnings(),
            "summary": summary,
        });

        serde_json::to_string_pretty(&document).map_err(|e| Error::Validation {
            field: "json_output".to_string(),
            message: format!("failed to serialize to JSON: {e}"),
        })
    }
}
