//! Semantic versioning of release tags.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::files::uses_vcs;
use crate::steps::{DetectionContext, DetectionRule, Outcome};

/// Prefixes stripped from a tag before matching, longest first.
pub const TAG_PREFIXES: &[&str] = &["rc-", "RC-", "rc", "RC", "v", "V"];

static SEMANTIC_VERSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+\.)?(\d+\.)?(\*|\d+)$").expect("semantic version regex must compile")
});

/// Strip release prefixes such as `v` or `rc-` from a tag.
pub fn normalize_tag(tag: &str) -> &str {
    let mut rest = tag.trim();
    while let Some(stripped) = TAG_PREFIXES
        .iter()
        .find_map(|prefix| rest.strip_prefix(prefix))
    {
        rest = stripped;
    }
    rest
}

/// Whether a tag looks like a semantic version once normalized.
pub fn is_semantic_version_tag(tag: &str) -> bool {
    SEMANTIC_VERSION.is_match(normalize_tag(tag))
}

/// Release tags follow semantic versioning.
///
/// Only meaningful under version control, so the VCS check is repeated here
/// rather than depending on the `vcs` step's status.
pub struct SemanticVersioningRule;

impl DetectionRule for SemanticVersioningRule {
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome {
        if !uses_vcs(ctx) {
            return Outcome::Violated;
        }

        let tags = match ctx.tag_lister().list_tags(ctx.root()) {
            Ok(tags) => tags,
            Err(e) => {
                debug!("Cannot list tags: {}", e);
                return Outcome::Violated;
            }
        };

        if tags.iter().any(|tag| is_semantic_version_tag(tag)) {
            Outcome::Satisfied
        } else {
            Outcome::Violated
        }
    }
}
