//! Rules that only check for files and directories at the package root.

use crate::detection::{EntryKind, MANIFEST_FILE};
use crate::steps::{DetectionContext, DetectionRule, Outcome};

/// Directory holding version-control metadata.
pub const VCS_DIRECTORY: &str = ".git";

/// Nested directory holding GitHub Actions workflows.
pub const CI_WORKFLOW_DIRECTORY: &str = ".github/workflows";

/// File name prefix of GitLab CI configuration.
pub const CI_CONFIG_PREFIX: &str = ".gitlab-ci";

/// Directories accepted as the home of domain code.
pub const SOURCE_DIRECTORIES: &[&str] = &["src", "app"];

fn outcome(satisfied: bool) -> Outcome {
    if satisfied {
        Outcome::Satisfied
    } else {
        Outcome::Violated
    }
}

/// Whether the package is under version control.
///
/// `.git` is accepted as a directory or as a file (worktrees and submodules).
pub fn uses_vcs(ctx: &DetectionContext<'_>) -> bool {
    ctx.probe().exists(VCS_DIRECTORY)
}

/// The package manifest exists at the root.
pub struct ManifestRule;

impl DetectionRule for ManifestRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        outcome(ctx.probe().has_file(MANIFEST_FILE))
    }
}

/// A top-level file starts with one of the given prefixes, ignoring case.
pub struct FilePrefixRule {
    prefixes: &'static [&'static str],
}

impl FilePrefixRule {
    /// Match files starting with any of `prefixes`.
    pub const fn new(prefixes: &'static [&'static str]) -> Self {
        Self { prefixes }
    }
}

impl DetectionRule for FilePrefixRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        outcome(
            ctx.probe()
                .has_entry_with_prefix(EntryKind::File, self.prefixes),
        )
    }
}

/// A dotfile with exactly this name exists at the root.
pub struct DotFileRule {
    name: &'static str,
}

impl DotFileRule {
    pub const fn new(name: &'static str) -> Self {
        Self { name }
    }
}

impl DetectionRule for DotFileRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        outcome(ctx.probe().has_file(self.name))
    }
}

/// A workflow directory or a CI config file exists.
pub struct ContinuousIntegrationRule;

impl DetectionRule for ContinuousIntegrationRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        let probe = ctx.probe();
        outcome(probe.has_dir(CI_WORKFLOW_DIRECTORY) || probe.has_file_with_prefix(CI_CONFIG_PREFIX))
    }
}

/// Domain code lives in `src/` or `app/`.
pub struct SourceLayoutRule;

impl DetectionRule for SourceLayoutRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        outcome(SOURCE_DIRECTORIES.iter().any(|dir| ctx.probe().has_dir(dir)))
    }
}

/// The package is under version control.
pub struct VcsRule;

impl DetectionRule for VcsRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        outcome(uses_vcs(ctx))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{StaticOutdatedChecker, StaticTagLister};
    use std::fs;
    use tempfile::TempDir;

    fn evaluate(rule: &dyn DetectionRule, temp: &TempDir) -> Outcome {
        let tags = StaticTagLister::failing();
        let outdated = StaticOutdatedChecker::failing();
        let ctx = DetectionContext::new(temp.path(), &tags, &outdated);
        rule.evaluate(&ctx)
    }

    #[test]
    fn manifest_rule() {
        let temp = TempDir::new().unwrap();
        assert_eq!(evaluate(&ManifestRule, &temp), Outcome::Violated);

        fs::write(temp.path().join("composer.json"), "{}").unwrap();
        assert_eq!(evaluate(&ManifestRule, &temp), Outcome::Satisfied);
    }

    #[test]
    fn file_prefix_rule_matches_extensions_and_case() {
        let temp = TempDir::new().unwrap();
        let rule = FilePrefixRule::new(&["CHANGELOG"]);
        assert_eq!(evaluate(&rule, &temp), Outcome::Violated);

        fs::write(temp.path().join("changelog.md"), "").unwrap();
        assert_eq!(evaluate(&rule, &temp), Outcome::Satisfied);
    }

    #[test]
    fn file_prefix_rule_ignores_nested_files() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("docs")).unwrap();
        fs::write(temp.path().join("docs/README.md"), "").unwrap();

        let rule = FilePrefixRule::new(&["README"]);
        assert_eq!(evaluate(&rule, &temp), Outcome::Violated);
    }

    #[test]
    fn dotfile_rule() {
        let temp = TempDir::new().unwrap();
        let rule = DotFileRule::new(".gitattributes");
        assert_eq!(evaluate(&rule, &temp), Outcome::Violated);

        fs::write(temp.path().join(".gitattributes"), "/tests export-ignore").unwrap();
        assert_eq!(evaluate(&rule, &temp), Outcome::Satisfied);
    }

    #[test]
    fn ci_rule_accepts_github_workflows() {
        let temp = TempDir::new().unwrap();
        assert_eq!(evaluate(&ContinuousIntegrationRule, &temp), Outcome::Violated);

        fs::create_dir_all(temp.path().join(".github/workflows")).unwrap();
        assert_eq!(evaluate(&ContinuousIntegrationRule, &temp), Outcome::Satisfied);
    }

    #[test]
    fn ci_rule_accepts_gitlab_config() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".gitlab-ci.yml"), "").unwrap();
        assert_eq!(evaluate(&ContinuousIntegrationRule, &temp), Outcome::Satisfied);
    }

    #[test]
    fn ci_rule_rejects_bare_github_directory() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join(".github")).unwrap();
        assert_eq!(evaluate(&ContinuousIntegrationRule, &temp), Outcome::Violated);
    }

    #[test]
    fn source_layout_rule() {
        let temp = TempDir::new().unwrap();
        assert_eq!(evaluate(&SourceLayoutRule, &temp), Outcome::Violated);

        fs::create_dir(temp.path().join("app")).unwrap();
        assert_eq!(evaluate(&SourceLayoutRule, &temp), Outcome::Satisfied);
    }

    #[test]
    fn vcs_rule_accepts_directory_and_file() {
        let temp = TempDir::new().unwrap();
        assert_eq!(evaluate(&VcsRule, &temp), Outcome::Violated);

        fs::write(temp.path().join(".git"), "gitdir: ../.git/worktrees/pkg").unwrap();
        assert_eq!(evaluate(&VcsRule, &temp), Outcome::Satisfied);

        let other = TempDir::new().unwrap();
        fs::create_dir(other.path().join(".git")).unwrap();
        assert_eq!(evaluate(&VcsRule, &other), Outcome::Satisfied);
    }
}
