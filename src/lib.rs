//! Package Analyser - check a PHP package against packaging best practices.
//!
//! The analyser walks a package directory through an ordered checklist of
//! steps (changelog present, tests written, CI configured, semantic version
//! tags, ...) and reports which ones the package satisfies.
//!
//! # Modules
//!
//! - [`analysis`] - The evaluation engine and per-run results
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - `.pa.yml` loading and validation
//! - [`detection`] - Filesystem probing and `composer.json` reading
//! - [`error`] - Error types and result aliases
//! - [`report`] - HTML report rendering
//! - [`shell`] - External command execution (`git`, `composer`)
//! - [`steps`] - The step registry and detection rules
//! - [`ui`] - Terminal output and tables
//!
//! # Example
//!
//! ```
//! use package_analyser::StepRegistry;
//!
//! let registry = StepRegistry::with_builtins();
//! assert_eq!(registry.ids()[0], "php-package");
//! assert!(registry.has_step("semantic-versioning"));
//! ```
//!
//! For full analysis runs, see the integration tests.

pub mod analysis;
pub mod cli;
pub mod config;
pub mod detection;
pub mod error;
pub mod report;
pub mod shell;
pub mod steps;
pub mod ui;

pub use analysis::{EvaluationRun, PackageAnalyser};
pub use config::Configuration;
pub use error::{AnalyserError, Result};
pub use steps::{StepRegistry, StepStatus};
