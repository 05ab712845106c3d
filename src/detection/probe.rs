//! Filesystem probe.
//!
//! Every check is resolved against an explicit package root and only looks at
//! the top level of that root (depth 0) unless a nested relative path is given.
//! Dotfiles and VCS metadata entries are always part of the scan.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::warn;

/// Kind of a top-level directory entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file (or a symlink resolving to one).
    File,
    /// A directory (or a symlink resolving to one).
    Directory,
}

/// A single entry directly below the package root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopLevelEntry {
    /// File name of the entry.
    pub name: String,
    /// Whether the entry is a file or a directory.
    pub kind: EntryKind,
}

/// Read-only existence checks relative to a package root.
#[derive(Debug, Clone)]
pub struct FilesystemProbe {
    root: PathBuf,
}

impl FilesystemProbe {
    /// Create a probe rooted at the given package directory.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The package root every check is resolved against.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List entries directly below the root, hidden entries included.
    ///
    /// An unreadable root yields an empty listing so that the calling rule
    /// fails closed.
    pub fn top_level_entries(&self) -> Vec<TopLevelEntry> {
        let read_dir = match fs::read_dir(&self.root) {
            Ok(read_dir) => read_dir,
            Err(e) => {
                warn!("Cannot list {}: {}", self.root.display(), e);
                return Vec::new();
            }
        };

        read_dir
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let path = entry.path();
                let kind = if path.is_dir() {
                    EntryKind::Directory
                } else if path.is_file() {
                    EntryKind::File
                } else {
                    return None;
                };
                Some(TopLevelEntry {
                    name: entry.file_name().to_string_lossy().into_owned(),
                    kind,
                })
            })
            .collect()
    }

    /// Check for a top-level entry of `kind` whose name starts with any of the
    /// given prefixes, ignoring ASCII case.
    pub fn has_entry_with_prefix(&self, kind: EntryKind, prefixes: &[&str]) -> bool {
        self.top_level_entries().iter().any(|entry| {
            entry.kind == kind
                && prefixes
                    .iter()
                    .any(|prefix| starts_with_ignore_case(&entry.name, prefix))
        })
    }

    /// Like [`has_entry_with_prefix`](Self::has_entry_with_prefix), but the
    /// prefix must match case-sensitively.
    pub fn has_entry_with_exact_prefix(&self, kind: EntryKind, prefixes: &[&str]) -> bool {
        self.top_level_entries().iter().any(|entry| {
            entry.kind == kind
                && prefixes
                    .iter()
                    .any(|prefix| entry.name.starts_with(prefix))
        })
    }

    /// Check for a top-level file whose name starts with `prefix`.
    pub fn has_file_with_prefix(&self, prefix: &str) -> bool {
        self.has_entry_with_prefix(EntryKind::File, &[prefix])
    }

    /// Check for a top-level file with exactly this name.
    pub fn has_file(&self, name: &str) -> bool {
        self.root.join(name).is_file()
    }

    /// Check for a directory at a path relative to the root.
    pub fn has_dir(&self, relative: &str) -> bool {
        self.root.join(relative).is_dir()
    }

    /// Check whether anything exists at a path relative to the root.
    pub fn exists(&self, relative: &str) -> bool {
        self.root.join(relative).exists()
    }

    /// Return the first relative path that exists, if any.
    pub fn first_existing(&self, candidates: &[&str]) -> Option<String> {
        candidates
            .iter()
            .find(|candidate| self.exists(candidate))
            .map(|candidate| candidate.to_string())
    }
}

fn starts_with_ignore_case(name: &str, prefix: &str) -> bool {
    name.len() >= prefix.len()
        && name.is_char_boundary(prefix.len())
        && name[..prefix.len()].eq_ignore_ascii_case(prefix)
}
