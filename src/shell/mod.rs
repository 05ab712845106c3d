//! External process invocation.
//!
//! Everything the analyser learns from outside the filesystem goes through
//! here: `git` for tags and `composer` for outdated dependencies.

pub mod command;
pub mod composer;
pub mod git;

pub use command::{execute, CommandOptions, CommandResult, DEFAULT_TIMEOUT};
pub use composer::{
    parse_outdated_report, ComposerOutdatedChecker, OutdatedChecker, OutdatedPackage,
    StaticOutdatedChecker,
};
pub use git::{parse_tag_list, GitTagLister, StaticTagLister, TagLister};
