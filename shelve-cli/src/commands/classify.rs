//! Classify command implementation.
//!
//! This module implements the `classify` command, which routes files into
//! folders and names chosen by an external classifier, read from a JSON
//! metadata file. Files the metadata never mentions fall through to the
//! unclassified safety net.

use crate::error::CliError;
use crate::utils::{collect_sources, finish_run, plan_options, resolve_run, GlobalOptions, OrganizeArgs};
use clap::Args;
use shelve::operations::{load_classification_records, plan_unclassified, ClassifyPlan};
use shelve::DirectoryInventory;
use std::path::PathBuf;

/// Organize files using classification metadata.
#[derive(Args)]
pub struct ClassifyCommand {
    /// JSON file with one {file_path, foldername, filename} record per file
    #[arg(long, value_name = "FILE", required = true)]
    pub metadata: PathBuf,

    #[command(flatten)]
    pub organize: OrganizeArgs,
}

impl ClassifyCommand {
    /// Execute the classify command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Merge flags, configuration file, and defaults
        let settings = resolve_run(&self.organize, global)?;

        // 2. Load the classification records
        let records = load_classification_records(&self.metadata).map_err(CliError::from)?;

        // 3. Enumerate candidate files and snapshot the output root
        let sources = collect_sources(&settings)?;
        let inventory = DirectoryInventory::scan(&settings.output);

        // 4. Build the strategy plan, then the safety-net pass for files
        //    the metadata never mentions
        let options = plan_options(&settings);
        let plan = ClassifyPlan::new(&records, &options)
            .build_plan(&inventory)
            .map_err(CliError::from)?;
        let net = plan_unclassified(&sources, &plan, &settings.output);
        let plan = plan.merge(net);

        // 5. Preview and execute
        finish_run(&plan, &settings, global)
    }
}
