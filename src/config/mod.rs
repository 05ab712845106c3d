//! Configuration loading and validation.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use package_analyser::config::load_configuration;
//! use package_analyser::steps::StepRegistry;
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! let path = temp.path().join(".pa.yml");
//! fs::write(&path, "stepsToOmit: [peck]\nviolationThreshold: 1").unwrap();
//!
//! let config = load_configuration(&path, &StepRegistry::with_builtins())
//!     .unwrap()
//!     .unwrap();
//! assert!(config.steps_to_omit.contains("peck"));
//! assert_eq!(config.effective_threshold(None), 1);
//! ```
//!
//! # Configuration File Location
//!
//! The file name defaults to `.pa.yml` and is resolved against the current
//! working directory, not the analysed package. A missing file is not an
//! error.

pub mod loader;
pub mod schema;
pub mod validator;

pub use loader::{load_configuration, parse_configuration, resolve_config_path};
pub use schema::{Configuration, CONFIGURATION_FILE, STEPS_TO_OMIT_KEY, VIOLATION_THRESHOLD_KEY};
pub use validator::validate_mapping;
