//! By-date command implementation.
//!
//! This module implements the `by-date` command, which routes every input
//! file into a `{year}/{month}` folder derived from its modification time.

use crate::error::CliError;
use crate::utils::{collect_sources, finish_run, plan_options, resolve_run, GlobalOptions, OrganizeArgs};
use clap::Args;
use shelve::operations::{plan_unclassified, DatePlan};
use shelve::DirectoryInventory;

/// Organize files into {year}/{month} folders by modification time.
#[derive(Args)]
pub struct ByDateCommand {
    #[command(flatten)]
    pub organize: OrganizeArgs,
}

impl ByDateCommand {
    /// Execute the by-date command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Merge flags, configuration file, and defaults
        let settings = resolve_run(&self.organize, global)?;

        // 2. Enumerate candidate files and snapshot the output root
        let sources = collect_sources(&settings)?;
        let inventory = DirectoryInventory::scan(&settings.output);

        // 3. Build the strategy plan, then the safety-net pass
        let options = plan_options(&settings);
        let plan = DatePlan::new(&sources, &options)
            .build_plan(&inventory)
            .map_err(CliError::from)?;
        let net = plan_unclassified(&sources, &plan, &settings.output);
        let plan = plan.merge(net);

        // 4. Preview and execute
        finish_run(&plan, &settings, global)
    }
}
