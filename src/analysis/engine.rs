//! The evaluation engine.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::run::EvaluationRun;
use crate::error::{AnalyserError, Result};
use crate::shell::{ComposerOutdatedChecker, GitTagLister, OutdatedChecker, TagLister};
use crate::steps::{DetectionContext, StepRegistry, StepStatus};

/// Runs the checklist against one package directory.
///
/// # Example
///
/// ```no_run
/// use std::collections::BTreeSet;
/// use package_analyser::PackageAnalyser;
///
/// let analyser = PackageAnalyser::new("path/to/package")?;
/// let run = analyser.analyse(&BTreeSet::new())?;
/// println!("{} violation(s)", run.violations().len());
/// # Ok::<(), package_analyser::AnalyserError>(())
/// ```
pub struct PackageAnalyser {
    directory: PathBuf,
    registry: StepRegistry,
    tag_lister: Box<dyn TagLister>,
    outdated_checker: Box<dyn OutdatedChecker>,
}

impl PackageAnalyser {
    /// Create an analyser for `directory` using the built-in checklist and
    /// the `git` and `composer` executables.
    ///
    /// # Errors
    ///
    /// Returns `DirectoryNotFound` if nothing exists at `directory`.
    pub fn new(directory: impl AsRef<Path>) -> Result<Self> {
        let directory = directory.as_ref();
        if !directory.exists() {
            return Err(AnalyserError::DirectoryNotFound {
                path: directory.to_path_buf(),
            });
        }

        let directory = fs::canonicalize(directory).unwrap_or_else(|_| directory.to_path_buf());

        Ok(Self {
            directory,
            registry: StepRegistry::with_builtins(),
            tag_lister: Box::new(GitTagLister::new()),
            outdated_checker: Box::new(ComposerOutdatedChecker::new()),
        })
    }

    /// Replace the tag lister.
    pub fn with_tag_lister(mut self, tag_lister: impl TagLister + 'static) -> Self {
        self.tag_lister = Box::new(tag_lister);
        self
    }

    /// Replace the outdated-dependency checker.
    pub fn with_outdated_checker(mut self, checker: impl OutdatedChecker + 'static) -> Self {
        self.outdated_checker = Box::new(checker);
        self
    }

    /// Replace the checklist.
    pub fn with_registry(mut self, registry: StepRegistry) -> Self {
        self.registry = registry;
        self
    }

    /// The (canonicalized) package directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// The checklist this analyser evaluates.
    pub fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Evaluate every step in registry order.
    ///
    /// Steps listed in `steps_to_omit` are marked omitted without running
    /// their detection rule. Each call builds a fresh run.
    pub fn analyse(&self, steps_to_omit: &BTreeSet<String>) -> Result<EvaluationRun> {
        info!(
            "Analysing {} ({} step(s) omitted)",
            self.directory.display(),
            steps_to_omit.len()
        );

        let ctx = DetectionContext::new(
            &self.directory,
            self.tag_lister.as_ref(),
            self.outdated_checker.as_ref(),
        );
        debug!("Package classification: {:?}", ctx.classification());

        let mut run = EvaluationRun::new(&self.directory, &self.registry);

        for step in self.registry.steps() {
            let status = if steps_to_omit.contains(step.id()) {
                StepStatus::Omitted
            } else {
                StepStatus::from(step.detect(&ctx))
            };

            debug!("Step {}: {}", step.id(), status);
            run.set_status(step.id(), status)?;
        }

        info!(
            "Evaluated {} step(s), {} violation(s)",
            run.len(),
            run.violations().len()
        );

        Ok(run)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{StaticOutdatedChecker, StaticTagLister};
    use crate::steps::{DetectionRule, Outcome, Step};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tempfile::TempDir;

    struct Counting(Arc<AtomicUsize>);

    impl DetectionRule for Counting {
        fn evaluate(&self, _ctx: &DetectionContext<'_>) -> Outcome {
            self.0.fetch_add(1, Ordering::SeqCst);
            Outcome::Satisfied
        }
    }

    fn analyser(temp: &TempDir) -> PackageAnalyser {
        PackageAnalyser::new(temp.path())
            .unwrap()
            .with_tag_lister(StaticTagLister::failing())
            .with_outdated_checker(StaticOutdatedChecker::failing())
    }

    #[test]
    fn missing_directory_fails_eagerly() {
        let result = PackageAnalyser::new("/tmp/non-existent-package-directory-xyz");
        assert!(matches!(
            result,
            Err(AnalyserError::DirectoryNotFound { .. })
        ));
    }

    #[test]
    fn runs_every_step() {
        let temp = TempDir::new().unwrap();
        let run = analyser(&temp).analyse(&BTreeSet::new()).unwrap();
        assert_eq!(run.len(), StepRegistry::with_builtins().len());
    }

    #[test]
    fn omitted_steps_skip_detection() {
        let temp = TempDir::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = StepRegistry::new();
        registry.register(Step::new("counted", "Counted", Counting(calls.clone())));

        let analyser = analyser(&temp).with_registry(registry);
        let omit = BTreeSet::from(["counted".to_string()]);
        let run = analyser.analyse(&omit).unwrap();

        assert_eq!(run.status_of("counted"), Some(StepStatus::Omitted));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn detection_runs_when_not_omitted() {
        let temp = TempDir::new().unwrap();
        let calls = Arc::new(AtomicUsize::new(0));
        let mut registry = StepRegistry::new();
        registry.register(Step::new("counted", "Counted", Counting(calls.clone())));

        let run = analyser(&temp)
            .with_registry(registry)
            .analyse(&BTreeSet::new())
            .unwrap();

        assert_eq!(run.status_of("counted"), Some(StepStatus::Satisfied));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn directory_is_canonical() {
        let temp = TempDir::new().unwrap();
        let analyser = analyser(&temp);
        assert!(analyser.directory().is_absolute());
        assert_eq!(analyser.registry().len(), 21);
    }
}
