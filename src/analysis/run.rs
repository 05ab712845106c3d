//! Results of one evaluation run.

use std::path::{Path, PathBuf};

use crate::error::{AnalyserError, Result};
use crate::steps::{StepRegistry, StepStatus};

/// Status of one step in one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepResult {
    /// Id of the evaluated step.
    pub id: &'static str,
    /// Summary of the evaluated step.
    pub summary: &'static str,
    /// Final status.
    pub status: StepStatus,
}

/// One line of the rendered checklist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    /// 1-based registry position.
    pub position: usize,
    /// Step id.
    pub id: &'static str,
    /// Step summary.
    pub summary: &'static str,
    /// Status glyph.
    pub glyph: &'static str,
    /// Status behind the glyph.
    pub status: StepStatus,
}

/// The ordered results of analysing one package directory.
#[derive(Debug, Clone)]
pub struct EvaluationRun {
    directory: PathBuf,
    results: Vec<StepResult>,
}

impl EvaluationRun {
    /// Start a run with every registered step marked as violated.
    pub fn new(directory: impl Into<PathBuf>, registry: &StepRegistry) -> Self {
        let results = registry
            .steps()
            .iter()
            .map(|step| StepResult {
                id: step.id(),
                summary: step.summary(),
                status: StepStatus::Violated,
            })
            .collect();

        Self {
            directory: directory.into(),
            results,
        }
    }

    /// Record the status of a step.
    ///
    /// # Errors
    ///
    /// Returns `UnknownStepId` if no step in this run has the given id.
    pub fn set_status(&mut self, id: &str, status: StepStatus) -> Result<()> {
        let result = self
            .results
            .iter_mut()
            .find(|r| r.id == id)
            .ok_or_else(|| AnalyserError::UnknownStepId { id: id.to_string() })?;
        result.status = status;
        Ok(())
    }

    /// The analysed directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// All results in registry order.
    pub fn results(&self) -> &[StepResult] {
        &self.results
    }

    /// Status of a single step.
    pub fn status_of(&self, id: &str) -> Option<StepStatus> {
        self.results.iter().find(|r| r.id == id).map(|r| r.status)
    }

    /// Statuses in registry order.
    pub fn statuses(&self) -> Vec<StepStatus> {
        self.results.iter().map(|r| r.status).collect()
    }

    /// Results whose status is violated, in registry order.
    pub fn violations(&self) -> Vec<&StepResult> {
        self.results
            .iter()
            .filter(|r| r.status.is_violation())
            .collect()
    }

    /// Number of omitted steps.
    pub fn omitted_count(&self) -> usize {
        self.results
            .iter()
            .filter(|r| r.status == StepStatus::Omitted)
            .count()
    }

    /// Rows for table and HTML rendering.
    pub fn steps_for_display(&self) -> Vec<DisplayRow> {
        self.results
            .iter()
            .enumerate()
            .map(|(index, r)| DisplayRow {
                position: index + 1,
                id: r.id,
                summary: r.summary,
                glyph: r.status.glyph(),
                status: r.status,
            })
            .collect()
    }

    /// Whether the violation count stays within `threshold`.
    pub fn within_threshold(&self, threshold: usize) -> bool {
        self.violations().len() <= threshold
    }

    /// Number of evaluated steps, omitted and irrelevant ones included.
    pub fn len(&self) -> usize {
        self.results.len()
    }

    /// Check if the run has no steps.
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}
