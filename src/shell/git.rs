//! Version-control tag listing.
//!
//! The semantic-versioning step only needs the tag names of a repository, so
//! the capability is a single-method trait. [`GitTagLister`] shells out to
//! `git tag --list`; tests substitute a [`StaticTagLister`].

use std::path::Path;
use std::time::Duration;

use crate::error::{AnalyserError, Result};

use super::command::{execute, CommandOptions, DEFAULT_TIMEOUT};

/// Lists the version-control tags of a package directory.
pub trait TagLister {
    /// Return all tag names for the repository at `package_root`.
    fn list_tags(&self, package_root: &Path) -> Result<Vec<String>>;
}

/// Tag lister backed by the `git` executable.
#[derive(Debug, Clone)]
pub struct GitTagLister {
    timeout: Duration,
}

impl Default for GitTagLister {
    fn default() -> Self {
        Self {
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl GitTagLister {
    /// Create a lister with the default timeout.
    pub fn new() -> Self {
        Self::default()
    }

    /// Override how long `git` may run.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl TagLister for GitTagLister {
    fn list_tags(&self, package_root: &Path) -> Result<Vec<String>> {
        let options = CommandOptions::in_dir(package_root).with_timeout(self.timeout);
        let result = execute("git", &["tag", "--list"], &options)?;

        if !result.success {
            return Err(AnalyserError::CommandFailed {
                command: "git tag --list".to_string(),
                code: result.exit_code,
            });
        }

        Ok(parse_tag_list(&result.stdout))
    }
}

/// Split `git tag --list` output into tag names, skipping blank lines.
pub fn parse_tag_list(output: &str) -> Vec<String> {
    output
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Tag lister returning a fixed list, for tests and dry runs.
///
/// The default value fails every call, like [`StaticTagLister::failing`].
#[derive(Debug, Clone, Default)]
pub struct StaticTagLister {
    tags: Option<Vec<String>>,
}

impl StaticTagLister {
    /// A lister that always returns the given tags.
    pub fn new<I, S>(tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tags: Some(tags.into_iter().map(Into::into).collect()),
        }
    }

    /// A lister whose every call fails, as if `git` were missing.
    pub fn failing() -> Self {
        Self { tags: None }
    }
}

impl TagLister for StaticTagLister {
    fn list_tags(&self, _package_root: &Path) -> Result<Vec<String>> {
        self.tags
            .clone()
            .ok_or_else(|| AnalyserError::CommandFailed {
                command: "git tag --list".to_string(),
                code: None,
            })
    }
}
