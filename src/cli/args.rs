//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::CONFIGURATION_FILE;

/// Package Analyser - check a PHP package against packaging best practices.
#[derive(Debug, Parser)]
#[command(name = "package-analyser")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Minimal output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Analyse the given package and provide tips on best practices
    Analyse(AnalyseArgs),

    /// List the analysis steps in report order
    Steps(StepsArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `analyse` command.
#[derive(Debug, Clone, clap::Args)]
pub struct AnalyseArgs {
    /// Directory of the package to analyse
    pub package_directory: PathBuf,

    /// Configuration file, resolved against the working directory
    #[arg(long, default_value = CONFIGURATION_FILE)]
    pub configuration: PathBuf,

    /// Number of violations tolerated before failing
    #[arg(long, env = "PA_VIOLATIONS_THRESHOLD")]
    pub violations_threshold: Option<usize>,

    /// Write an HTML report into the working directory
    #[arg(long)]
    pub write_report: bool,
}

impl AnalyseArgs {
    /// Arguments analysing `package_directory` with defaults otherwise.
    pub fn for_directory(package_directory: impl Into<PathBuf>) -> Self {
        Self {
            package_directory: package_directory.into(),
            configuration: PathBuf::from(CONFIGURATION_FILE),
            violations_threshold: None,
            write_report: false,
        }
    }
}

/// Arguments for the `steps` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct StepsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
