//! Rules driven by the Composer manifest and the `composer` tool.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::steps::{DetectionContext, DetectionRule, Outcome};

/// Oldest PHP version that is still supported upstream.
pub const LATEST_SUPPORTED_PHP: f64 = 8.1;

/// Operators removed from a constraint before reading its version.
const CONSTRAINT_OPERATORS: &[&str] = &["^", "~", ">="];

static LEADING_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+(?:\.\d+)?)").expect("leading version regex must compile")
});

/// Read the minimum version from a constraint such as `^8.2` or `>=8.1.0`.
///
/// Returns `None` when no version number leads the constraint.
pub fn constraint_version(constraint: &str) -> Option<f64> {
    let stripped = CONSTRAINT_OPERATORS
        .iter()
        .fold(constraint.to_string(), |acc, op| acc.replace(op, ""));

    LEADING_VERSION
        .captures(&stripped)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// The manifest declares at least one script.
pub struct ComposerScriptsRule;

impl DetectionRule for ComposerScriptsRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        match ctx.manifest() {
            Some(manifest) if manifest.has_scripts() => Outcome::Satisfied,
            _ => Outcome::Violated,
        }
    }
}

/// The PHP constraint requires a supported version.
pub struct SupportedPhpRule;

impl DetectionRule for SupportedPhpRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        let version = ctx
            .manifest()
            .and_then(|m| m.php_constraint())
            .and_then(constraint_version);

        match version {
            Some(v) if v >= LATEST_SUPPORTED_PHP => Outcome::Satisfied,
            Some(v) => {
                debug!("PHP constraint {} is below {}", v, LATEST_SUPPORTED_PHP);
                Outcome::Violated
            }
            None => Outcome::Violated,
        }
    }
}

/// `composer outdated` reports on the direct dependencies.
///
/// The step is satisfied when the report lists at least one entry, which is
/// how the check has always behaved.
pub struct OutdatedDependenciesRule;

impl DetectionRule for OutdatedDependenciesRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        if ctx.manifest().is_none() {
            return Outcome::Violated;
        }

        match ctx.outdated_checker().outdated_direct_dependencies(ctx.root()) {
            Ok(packages) if !packages.is_empty() => Outcome::Satisfied,
            Ok(_) => Outcome::Violated,
            Err(e) => {
                debug!("Outdated check failed: {}", e);
                Outcome::Violated
            }
        }
    }
}
