//! The checklist.
//!
//! - [`Step`] - One checklist entry with its detection rule
//! - [`StepRegistry`] - The ordered catalog of steps
//! - [`DetectionContext`] - Everything a rule may inspect during a run
//! - [`rules`] - The built-in detection rules
//!
//! # Example
//!
//! ```
//! use package_analyser::steps::StepRegistry;
//!
//! let registry = StepRegistry::with_builtins();
//! assert!(registry.has_step("semantic-versioning"));
//! assert_eq!(registry.steps()[0].id(), "php-package");
//! ```

pub mod context;
pub mod registry;
pub mod rules;
pub mod step;

pub use context::{Classification, DetectionContext};
pub use registry::StepRegistry;
pub use step::{DetectionRule, Outcome, Step, StepStatus};
