//! Error types for package analysis.
//!
//! This module defines [`AnalyserError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `AnalyserError` for failures that abort a run (missing directory,
//!   invalid configuration) or indicate a programming error (unknown step id)
//! - Detection rules never surface errors: a failed probe, manifest read or
//!   external command degrades that single step to a violation
//! - Use `anyhow::Error` (via `AnalyserError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for package analysis.
#[derive(Debug, Error)]
pub enum AnalyserError {
    /// The package directory to analyse does not exist.
    #[error("Provided package directory '{path}' does not exist.")]
    DirectoryNotFound { path: PathBuf },

    /// A step status update referenced an id absent from the registry.
    #[error("Step id '{id}' does not exist.")]
    UnknownStepId { id: String },

    /// Configuration has the wrong shape or references unknown steps.
    #[error("{message}")]
    InvalidConfiguration { message: String },

    /// Failed to parse a configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// External command could not be run or exited unsuccessfully.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// External command exceeded its time budget and was killed.
    #[error("Command timed out after {seconds}s: {command}")]
    CommandTimedOut { command: String, seconds: u64 },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for package analysis operations.
pub type Result<T> = std::result::Result<T, AnalyserError>;
