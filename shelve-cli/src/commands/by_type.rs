//! By-type command implementation.
//!
//! This module implements the `by-type` command, which routes every input
//! file into a category folder derived from its extension.

use crate::error::CliError;
use crate::utils::{collect_sources, finish_run, plan_options, resolve_run, GlobalOptions, OrganizeArgs};
use clap::Args;
use shelve::operations::{plan_unclassified, TypePlan};
use shelve::DirectoryInventory;

/// Organize files into folders by file type.
#[derive(Args)]
pub struct ByTypeCommand {
    #[command(flatten)]
    pub organize: OrganizeArgs,
}

impl ByTypeCommand {
    /// Execute the by-type command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Merge flags, configuration file, and defaults
        let settings = resolve_run(&self.organize, global)?;

        // 2. Enumerate candidate files and snapshot the output root
        let sources = collect_sources(&settings)?;
        let inventory = DirectoryInventory::scan(&settings.output);

        // 3. Build the strategy plan, then the safety-net pass
        let options = plan_options(&settings);
        let plan = TypePlan::new(&sources, &options)
            .build_plan(&inventory)
            .map_err(CliError::from)?;
        let net = plan_unclassified(&sources, &plan, &settings.output);
        let plan = plan.merge(net);

        // 4. Preview and execute
        finish_run(&plan, &settings, global)
    }
}
