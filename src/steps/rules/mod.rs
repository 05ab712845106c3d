//! Built-in detection rules.

mod cli;
mod composer;
mod files;
mod tooling;
mod versioning;

pub use cli::{CliBinaryRule, CliClassificationRule, CliPharRule, BIN_DIRECTORY, PHAR_CONFIG_PREFIX};
pub use composer::{
    constraint_version, ComposerScriptsRule, OutdatedDependenciesRule, SupportedPhpRule,
    LATEST_SUPPORTED_PHP,
};
pub use files::{
    uses_vcs, ContinuousIntegrationRule, DotFileRule, FilePrefixRule, ManifestRule,
    SourceLayoutRule, VcsRule, CI_CONFIG_PREFIX, CI_WORKFLOW_DIRECTORY, SOURCE_DIRECTORIES,
    VCS_DIRECTORY,
};
pub use tooling::{
    TestsRule, ToolRule, CODING_STYLE_CONFIGS, CODING_STYLE_TOOLS, STATIC_ANALYSIS_TOOLS,
    TESTING_TOOLS, TEST_DIRECTORY_PREFIXES, VENDOR_BIN,
};
pub use versioning::{is_semantic_version_tag, normalize_tag, SemanticVersioningRule, TAG_PREFIXES};
