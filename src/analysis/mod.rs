//! Package analysis.
//!
//! - [`PackageAnalyser`] - Evaluates the checklist against a directory
//! - [`EvaluationRun`] - The ordered results, with the queries reports need

pub mod engine;
pub mod run;

pub use engine::PackageAnalyser;
pub use run::{DisplayRow, EvaluationRun, StepResult};
