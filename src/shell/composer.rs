//! Composer outdated-dependency check.

use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::error::{AnalyserError, Result};

use super::command::{execute, CommandOptions, DEFAULT_TIMEOUT};

const OUTDATED_ARGS: &[&str] = &["outdated", "--format=json", "--direct"];

/// One entry of the `installed` array reported by `composer outdated`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct OutdatedPackage {
    /// Package name, e.g. `symfony/console`.
    #[serde(default)]
    pub name: String,
    /// Installed version.
    #[serde(default)]
    pub version: String,
    /// Newest available version, when reported.
    #[serde(default)]
    pub latest: Option<String>,
}

#[derive(Debug, Deserialize)]
struct OutdatedReport {
    installed: Vec<OutdatedPackage>,
}

/// Reports the outdated direct dependencies of a package.
pub trait OutdatedChecker {
    /// Return the outdated direct dependencies of the package at `package_root`.
    fn outdated_direct_dependencies(&self, package_root: &Path) -> Result<Vec<OutdatedPackage>>;
}

/// Checker backed by the `composer` executable.
#[derive(Debug, Clone)]
pub struct ComposerOutdatedChecker {
    timeout: Duration,
}

impl Default for ComposerOutdatedChecker {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ComposerOutdatedChecker {
    /// Create a checker with the default timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override how long `composer` may run.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl OutdatedChecker for ComposerOutdatedChecker {
    fn outdated_direct_dependencies(&self, package_root: &Path) -> Result<Vec<OutdatedPackage>> {
        let options = CommandOptions::in_dir(package_root).with_timeout(self.timeout);
        let result = execute("composer", OUTDATED_ARGS, &options)?;

        // Composer may exit non-zero while still printing a usable report.
        if !result.success {
            debug!(
                "composer outdated exited with {:?}, parsing output anyway",
                result.exit_code
            );
        }

        parse_outdated_report(&result.stdout)
    }
}

/// Parse the JSON printed by `composer outdated --format=json`.
///
/// # Errors
///
/// Fails when the output is not JSON or lacks an `installed` array.
pub fn parse_outdated_report(output: &str) -> Result<Vec<OutdatedPackage>> {
    let report: OutdatedReport = serde_json::from_str(output).map_err(|e| {
        AnalyserError::Other(anyhow::anyhow!(
            "Unparseable composer outdated output: {}",
            e
        ))
    })?;
    Ok(report.installed)
}

/// Checker returning a fixed answer, for tests and dry runs.
///
/// The default value fails every call, like [`StaticOutdatedChecker::failing`].
#[derive(Debug, Clone, Default)]
pub struct StaticOutdatedChecker {
    packages: Option<Vec<OutdatedPackage>>,
}

impl StaticOutdatedChecker {
    /// A checker that always reports the given packages.
    pub fn new(packages: Vec<OutdatedPackage>) -> Self {
        Self {
            packages: Some(packages),
        }
    }

    /// A checker reporting one outdated package per given name.
    pub fn with_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::new(
            names
                .into_iter()
                .map(|name| OutdatedPackage {
                    name: name.into(),
                    ..Default::default()
                })
                .collect(),
        )
    }

    /// A checker whose every call fails, as if `composer` were missing.
    pub fn failing() -> Self {
        Self { packages: None }
    }
}

impl OutdatedChecker for StaticOutdatedChecker {
    fn outdated_direct_dependencies(&self, _package_root: &Path) -> Result<Vec<OutdatedPackage>> {
        self.packages
            .clone()
            .ok_or_else(|| AnalyserError::CommandFailed {
                command: format!("composer {}", OUTDATED_ARGS.join(" ")),
                code: None,
            })
    }
}
