//! Rules for command-line and terminal UI packages.
//!
//! All three read the [`Classification`](crate::steps::Classification)
//! computed when the run's context was built, so they give the same answer
//! whether or not the `cli` step itself is omitted.

use crate::detection::EntryKind;
use crate::steps::{DetectionContext, DetectionRule, Outcome};

/// Directory CLI binaries are expected in.
pub const BIN_DIRECTORY: &str = "bin";

/// Prefix of PHAR build configuration files.
pub const PHAR_CONFIG_PREFIX: &str = "box.json";

/// Reports the package classification.
pub struct CliClassificationRule;

impl DetectionRule for CliClassificationRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        if ctx.classification().is_cli_or_tui() {
            Outcome::Satisfied
        } else {
            Outcome::Irrelevant
        }
    }
}

/// CLI binaries live in `bin/`.
pub struct CliBinaryRule;

impl DetectionRule for CliBinaryRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        if !ctx.classification().is_cli_or_tui() {
            return Outcome::Irrelevant;
        }

        if ctx.probe().has_dir(BIN_DIRECTORY) {
            Outcome::Satisfied
        } else {
            Outcome::Violated
        }
    }
}

/// CLI packages are distributed as a PHAR.
///
/// Any CLI package passes; the presence of a `box.json*` file is only
/// logged. See DESIGN.md for why this stays permissive.
pub struct CliPharRule;

impl DetectionRule for CliPharRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        if !ctx.classification().is_cli_or_tui() {
            return Outcome::Irrelevant;
        }

        let has_config = ctx
            .probe()
            .has_entry_with_prefix(EntryKind::File, &[PHAR_CONFIG_PREFIX]);
        tracing::debug!("PHAR config present: {}", has_config);

        Outcome::Satisfied
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{StaticOutdatedChecker, StaticTagLister};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn evaluate(rule: &dyn DetectionRule, root: &Path) -> Outcome {
        let tags = StaticTagLister::failing();
        let outdated = StaticOutdatedChecker::failing();
        let ctx = DetectionContext::new(root, &tags, &outdated);
        rule.evaluate(&ctx)
    }

    fn cli_package() -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("composer.json"),
            r#"{"keywords": ["cli"]}"#,
        )
        .unwrap();
        temp
    }

    #[test]
    fn all_irrelevant_for_libraries() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("bin")).unwrap();

        assert_eq!(evaluate(&CliClassificationRule, temp.path()), Outcome::Irrelevant);
        assert_eq!(evaluate(&CliBinaryRule, temp.path()), Outcome::Irrelevant);
        assert_eq!(evaluate(&CliPharRule, temp.path()), Outcome::Irrelevant);
    }

    #[test]
    fn classification_satisfied_for_cli() {
        let temp = cli_package();
        assert_eq!(evaluate(&CliClassificationRule, temp.path()), Outcome::Satisfied);
    }

    #[test]
    fn binary_rule_needs_bin_directory() {
        let temp = cli_package();
        assert_eq!(evaluate(&CliBinaryRule, temp.path()), Outcome::Violated);

        fs::create_dir(temp.path().join("bin")).unwrap();
        assert_eq!(evaluate(&CliBinaryRule, temp.path()), Outcome::Satisfied);
    }

    #[test]
    fn phar_rule_is_permissive() {
        let temp = cli_package();
        assert_eq!(evaluate(&CliPharRule, temp.path()), Outcome::Satisfied);

        fs::write(temp.path().join("box.json.dist"), "{}").unwrap();
        assert_eq!(evaluate(&CliPharRule, temp.path()), Outcome::Satisfied);
    }
}
