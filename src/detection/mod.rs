//! Read-only inspection of a package directory.
//!
//! - [`probe`] - existence checks for files and directories
//! - [`manifest`] - the fields of `composer.json` the checklist inspects

pub mod manifest;
pub mod probe;

pub use manifest::{ComposerManifest, CLI_KEYWORDS, MANIFEST_FILE};
pub use probe::{EntryKind, FilesystemProbe, TopLevelEntry};
