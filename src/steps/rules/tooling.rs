//! Rules that look for development tools installed by Composer.

use tracing::debug;

use crate::detection::EntryKind;
use crate::steps::{DetectionContext, DetectionRule, Outcome};

/// Directory Composer installs dependency binaries into.
pub const VENDOR_BIN: &str = "vendor/bin";

/// Prefixes of top-level directories that hold tests or specs.
pub const TEST_DIRECTORY_PREFIXES: &[&str] = &["test", "spec"];

/// Testing tool binaries.
pub const TESTING_TOOLS: &[&str] = &["phpspec", "phpunit", "pest"];

/// Coding style tool binaries.
pub const CODING_STYLE_TOOLS: &[&str] = &["phpcs", "phpcbf", "pint", "php-cs-fixer", "ecs"];

/// Top-level config files that also count as a coding style tool.
pub const CODING_STYLE_CONFIGS: &[&str] = &["mago.toml"];

/// Static analysis tool binaries.
pub const STATIC_ANALYSIS_TOOLS: &[&str] = &["phpstan"];

fn has_vendor_binary(ctx: &DetectionContext<'_>, binaries: &[&str]) -> bool {
    let candidates: Vec<String> = binaries
        .iter()
        .map(|binary| format!("{}/{}", VENDOR_BIN, binary))
        .collect();
    let candidates: Vec<&str> = candidates.iter().map(String::as_str).collect();

    match ctx.probe().first_existing(&candidates) {
        Some(found) => {
            debug!("Found {}", found);
            true
        }
        None => false,
    }
}

/// One of the given tools is installed, or one of its config files exists.
pub struct ToolRule {
    binaries: &'static [&'static str],
    config_files: &'static [&'static str],
}

impl ToolRule {
    /// Accept any of `binaries` under `vendor/bin`.
    pub const fn binaries(binaries: &'static [&'static str]) -> Self {
        Self {
            binaries,
            config_files: &[],
        }
    }

    /// Also accept any of `config_files` at the root.
    pub const fn or_config(mut self, config_files: &'static [&'static str]) -> Self {
        self.config_files = config_files;
        self
    }
}

impl DetectionRule for ToolRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        let configured = self.config_files.iter().any(|f| ctx.probe().has_file(f));

        if has_vendor_binary(ctx, self.binaries) || configured {
            Outcome::Satisfied
        } else {
            Outcome::Violated
        }
    }
}

/// Tests exist and a testing tool is installed to run them.
pub struct TestsRule;

impl DetectionRule for TestsRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        let has_test_directory = ctx
            .probe()
            .has_entry_with_exact_prefix(EntryKind::Directory, TEST_DIRECTORY_PREFIXES);

        if has_test_directory && has_vendor_binary(ctx, TESTING_TOOLS) {
            Outcome::Satisfied
        } else {
            Outcome::Violated
        }
    }
}
