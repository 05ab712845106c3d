//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands (`package-analyser analyse`, `package-analyser steps`) to
//! their implementations.

pub mod analyse;
pub mod completions;
pub mod dispatcher;
pub mod steps;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
