//! Analyse command implementation.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::analysis::{EvaluationRun, PackageAnalyser};
use crate::cli::args::AnalyseArgs;
use crate::config::{load_configuration, resolve_config_path, Configuration, CONFIGURATION_FILE};
use crate::error::{AnalyserError, Result};
use crate::report::ReportWriter;
use crate::ui::{Table, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The analyse command implementation.
pub struct AnalyseCommand {
    working_dir: PathBuf,
    args: AnalyseArgs,
}

impl AnalyseCommand {
    /// Create a new analyse command.
    pub fn new(working_dir: &Path, args: AnalyseArgs) -> Self {
        Self {
            working_dir: working_dir.to_path_buf(),
            args,
        }
    }

    /// Get the working directory.
    pub fn working_dir(&self) -> &Path {
        &self.working_dir
    }

    /// Get the command arguments.
    pub fn args(&self) -> &AnalyseArgs {
        &self.args
    }

    /// The package directory, relative paths taken from the working directory.
    pub fn package_directory(&self) -> PathBuf {
        let directory = &self.args.package_directory;
        if directory.is_absolute() {
            directory.clone()
        } else {
            self.working_dir.join(directory)
        }
    }

    fn load_configuration(
        &self,
        analyser: &PackageAnalyser,
        ui: &mut dyn UserInterface,
    ) -> Result<Configuration> {
        let path = resolve_config_path(&self.working_dir, &self.args.configuration);
        let config = load_configuration(&path, analyser.registry())?;

        let explicit = self.args.configuration != Path::new(CONFIGURATION_FILE);
        if config.is_none() && explicit && !path.exists() {
            ui.warning(&format!(
                "Configuration {} not found, using defaults.",
                path.display()
            ));
        }

        Ok(config.unwrap_or_default())
    }
}

impl Command for AnalyseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let analyser = match PackageAnalyser::new(self.package_directory()) {
            Ok(analyser) => analyser,
            Err(e @ AnalyserError::DirectoryNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        ui.labeled(
            "Analysing package in directory",
            &analyser.directory().display().to_string(),
        );

        let config = match self.load_configuration(&analyser, ui) {
            Ok(config) => config,
            Err(
                e @ (AnalyserError::InvalidConfiguration { .. }
                | AnalyserError::ConfigParseError { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        };

        if let Some(source) = &config.source {
            ui.labeled("Using configuration", &source.display().to_string());
        }

        let run = analyser.analyse(&config.steps_to_omit)?;
        ui.show_table(&checklist_table(&run));

        if self.args.write_report {
            ui.labeled(
                "Writing package analysis report to",
                &self.working_dir.display().to_string(),
            );
            let path = ReportWriter::new(&run).write(&self.working_dir)?;
            ui.success(&format!("Wrote {}", path.display()));
        }

        let threshold = config.effective_threshold(self.args.violations_threshold);
        let violations = run.violations().len();
        debug!("{} violation(s) against a threshold of {}", violations, threshold);

        if run.within_threshold(threshold) {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(1))
        }
    }
}

/// Build the checklist table shown after an analysis.
pub fn checklist_table(run: &EvaluationRun) -> Table {
    let mut table = Table::new(vec!["#", "Analyse step", "Status"]);
    for row in run.steps_for_display() {
        let position = row.position.to_string();
        table.add_row(vec![position.as_str(), row.summary, row.glyph]);
    }
    table.set_footer(summary_line(run));
    table
}

/// The footer sentence summarising a run.
pub fn summary_line(run: &EvaluationRun) -> String {
    let mut sentences = vec![format!("Ran {} analysis steps.", run.len())];

    let violations = run.violations().len();
    if violations > 0 {
        sentences.push(format!(
            "Found {} optimiseable {}.",
            violations,
            plural(violations, "aspect", "aspects")
        ));
    }

    let omitted = run.omitted_count();
    if omitted > 0 {
        sentences.push(format!(
            "Omitted {} analyse {}.",
            omitted,
            plural(omitted, "step", "steps")
        ));
    }

    sentences.join(" ")
}

fn plural<'a>(count: usize, one: &'a str, many: &'a str) -> &'a str {
    if count == 1 {
        one
    } else {
        many
    }
}
