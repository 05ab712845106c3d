//! Step registry.
//!
//! The [`StepRegistry`] holds the checklist in report order. Each [`Step`]
//! carries its own detection rule, so adding a check means adding one entry
//! to [`StepRegistry::with_builtins`].

use super::rules::{
    CliBinaryRule, CliClassificationRule, CliPharRule, ComposerScriptsRule,
    ContinuousIntegrationRule, DotFileRule, FilePrefixRule, ManifestRule,
    OutdatedDependenciesRule, SemanticVersioningRule, SourceLayoutRule, SupportedPhpRule,
    TestsRule, ToolRule, VcsRule, CODING_STYLE_CONFIGS, CODING_STYLE_TOOLS,
    STATIC_ANALYSIS_TOOLS,
};
use super::step::Step;

/// Ordered catalog of checklist steps.
#[derive(Debug, Default)]
pub struct StepRegistry {
    steps: Vec<Step>,
}

impl StepRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self { steps: Vec::new() }
    }

    /// Create a registry with the built-in checklist.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(Step::new(
            "php-package",
            "The given package is written in 🐘.",
            ManifestRule,
        ));
        registry.register(Step::new(
            "changelog",
            "Keep a CHANGELOG.md file in the base directory of the package.",
            FilePrefixRule::new(&["CHANGELOG"]),
        ));
        registry.register(Step::new(
            "tests",
            "Write tests or specs for the package.",
            TestsRule,
        ));
        registry.register(Step::new(
            "ci",
            "Use continuous integration.",
            ContinuousIntegrationRule,
        ));
        registry.register(Step::new(
            "readme",
            "Provide a README.md in the base directory of the package.",
            FilePrefixRule::new(&["README"]),
        ));
        registry.register(Step::new(
            "coding-style",
            "Enforce a coding style.",
            ToolRule::binaries(CODING_STYLE_TOOLS).or_config(CODING_STYLE_CONFIGS),
        ));
        registry.register(Step::new(
            "static-analyse",
            "Utilise static analysis tools like PHPStan.",
            ToolRule::binaries(STATIC_ANALYSIS_TOOLS),
        ));
        registry.register(Step::new(
            "semantic-versioning",
            "Use Semantic Versioning to manage version numbers.",
            SemanticVersioningRule,
        ));
        registry.register(Step::new(
            "license",
            "Include a license file in the base directory of the package.",
            FilePrefixRule::new(&["LICENSE"]),
        ));
        registry.register(Step::new(
            "gitignore",
            "Keep a .gitignore file in the base directory of the package to keep unwanted files unversioned.",
            DotFileRule::new(".gitignore"),
        ));
        registry.register(Step::new(
            "gitattributes",
            "Keep a .gitattributes file in the base directory of the package to keep dist releases lean.",
            DotFileRule::new(".gitattributes"),
        ));
        registry.register(Step::new(
            "autoloader",
            "Place domain code in a /src or app/ directory in the base directory of the package.",
            SourceLayoutRule,
        ));
        registry.register(Step::new(
            "vcs",
            "Utilise a source code management system like Git.",
            VcsRule,
        ));
        registry.register(Step::new(
            "cli",
            "The given package is a CLI/TUI.",
            CliClassificationRule,
        ));
        registry.register(Step::new(
            "cli-binary",
            "Put CLI/TUI binaries in a /bin directory in the base directory of the package.",
            CliBinaryRule,
        ));
        registry.register(Step::new(
            "cli-phar",
            "Distribute CLI/TUI binaries via PHAR.",
            CliPharRule,
        ));
        registry.register(Step::new(
            "composer-scripts",
            "Utilise Composer scripts.",
            ComposerScriptsRule,
        ));
        registry.register(Step::new(
            "eol-php",
            "Use a supported PHP version.",
            SupportedPhpRule,
        ));
        registry.register(Step::new(
            "peck",
            "Utilise Peck for detecting spelling mistakes.",
            ToolRule::binaries(&["peck"]),
        ));
        registry.register(Step::new(
            "rector",
            "Utilise Rector to continuously refactor your code.",
            ToolRule::binaries(&["rector"]),
        ));
        registry.register(Step::new(
            "composer-outdated",
            "Update your direct Composer dependencies.",
            OutdatedDependenciesRule,
        ));
        registry
    }

    /// Append a step. A step whose id is already registered replaces the
    /// existing entry in place.
    pub fn register(&mut self, step: Step) {
        match self.steps.iter_mut().find(|s| s.id() == step.id()) {
            Some(existing) => *existing = step,
            None => self.steps.push(step),
        }
    }

    /// Steps in report order.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Whether a step with this id exists.
    pub fn has_step(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Get a step by id.
    pub fn get(&self, id: &str) -> Option<&Step> {
        self.steps.iter().find(|s| s.id() == id)
    }

    /// Step ids in report order.
    pub fn ids(&self) -> Vec<&'static str> {
        self.steps.iter().map(Step::id).collect()
    }

    /// Get the number of registered steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}
