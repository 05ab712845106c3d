//! Steps command implementation.

use serde::Serialize;

use crate::cli::args::StepsArgs;
use crate::error::{AnalyserError, Result};
use crate::steps::StepRegistry;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// One entry of the `steps --json` listing.
#[derive(Debug, Serialize)]
pub struct StepEntry {
    pub position: usize,
    pub id: &'static str,
    pub summary: &'static str,
}

/// The steps command implementation.
pub struct StepsCommand {
    args: StepsArgs,
}

impl StepsCommand {
    /// Create a new steps command.
    pub fn new(args: StepsArgs) -> Self {
        Self { args }
    }

    /// Get the command arguments.
    pub fn args(&self) -> &StepsArgs {
        &self.args
    }
}

/// Entries for every registered step, in registry order.
pub fn step_entries(registry: &StepRegistry) -> Vec<StepEntry> {
    registry
        .steps()
        .iter()
        .enumerate()
        .map(|(index, step)| StepEntry {
            position: index + 1,
            id: step.id(),
            summary: step.summary(),
        })
        .collect()
}

impl Command for StepsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let registry = StepRegistry::with_builtins();
        let entries = step_entries(&registry);

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries)
                .map_err(|e| AnalyserError::Other(e.into()))?;
            ui.data(&json);
            return Ok(CommandResult::success());
        }

        let mut table = Table::new(vec!["#", "Id", "Summary"]);
        for entry in &entries {
            let position = entry.position.to_string();
            table.add_row(vec![position.as_str(), entry.id, entry.summary]);
        }
        ui.show_table(&table);

        Ok(CommandResult::success())
    }
}
