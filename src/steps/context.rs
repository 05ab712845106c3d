//! Per-run detection context.
//!
//! Everything a detection rule may look at is gathered here once per run:
//! the filesystem probe, the parsed manifest, the package classification and
//! the external collaborators. Rules receive it by shared reference.

use std::path::Path;

use crate::detection::{ComposerManifest, FilesystemProbe};
use crate::shell::{OutdatedChecker, TagLister};

/// Whether the package is a command-line or terminal UI application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// The manifest declares a `cli`, `tui` or `console` keyword.
    CliOrTui,
    /// Any other package, including ones without a manifest.
    Other,
}

impl Classification {
    /// Classify a package from its manifest.
    pub fn from_manifest(manifest: Option<&ComposerManifest>) -> Self {
        match manifest {
            Some(m) if m.declares_cli_or_tui() => Self::CliOrTui,
            _ => Self::Other,
        }
    }

    /// Whether CLI-only steps apply.
    pub fn is_cli_or_tui(self) -> bool {
        self == Self::CliOrTui
    }
}

/// Inputs shared by all detection rules during one run.
pub struct DetectionContext<'a> {
    probe: FilesystemProbe,
    manifest: Option<ComposerManifest>,
    classification: Classification,
    tag_lister: &'a dyn TagLister,
    outdated_checker: &'a dyn OutdatedChecker,
}

impl<'a> DetectionContext<'a> {
    /// Build the context for `package_root`, reading the manifest and
    /// classifying the package up front.
    pub fn new(
        package_root: &Path,
        tag_lister: &'a dyn TagLister,
        outdated_checker: &'a dyn OutdatedChecker,
    ) -> Self {
        let manifest = ComposerManifest::load(package_root);
        let classification = Classification::from_manifest(manifest.as_ref());

        Self {
            probe: FilesystemProbe::new(package_root),
            manifest,
            classification,
            tag_lister,
            outdated_checker,
        }
    }

    /// The package root.
    pub fn root(&self) -> &Path {
        self.probe.root()
    }

    /// Filesystem checks relative to the package root.
    pub fn probe(&self) -> &FilesystemProbe {
        &self.probe
    }

    /// The parsed manifest, if one exists and is valid JSON.
    pub fn manifest(&self) -> Option<&ComposerManifest> {
        self.manifest.as_ref()
    }

    /// The classification computed for this run.
    pub fn classification(&self) -> Classification {
        self.classification
    }

    /// Source of version-control tags.
    pub fn tag_lister(&self) -> &dyn TagLister {
        self.tag_lister
    }

    /// Source of outdated-dependency information.
    pub fn outdated_checker(&self) -> &dyn OutdatedChecker {
        self.outdated_checker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shell::{StaticOutdatedChecker, StaticTagLister};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn classification_requires_manifest() {
        assert_eq!(Classification::from_manifest(None), Classification::Other);
    }

    #[test]
    fn classification_from_keywords() {
        let cli = ComposerManifest::parse(r#"{"keywords": ["tui"]}"#).unwrap();
        let lib = ComposerManifest::parse(r#"{"keywords": ["library"]}"#).unwrap();

        assert!(Classification::from_manifest(Some(&cli)).is_cli_or_tui());
        assert!(!Classification::from_manifest(Some(&lib)).is_cli_or_tui());
    }

    #[test]
    fn context_reads_manifest_once() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join("composer.json"),
            r#"{"keywords": ["console"]}"#,
        )
        .unwrap();
        let tags = StaticTagLister::default();
        let outdated = StaticOutdatedChecker::default();

        let ctx = DetectionContext::new(temp.path(), &tags, &outdated);

        assert!(ctx.manifest().is_some());
        assert_eq!(ctx.classification(), Classification::CliOrTui);
        assert_eq!(ctx.root(), temp.path());
    }

    #[test]
    fn context_without_manifest() {
        let temp = TempDir::new().unwrap();
        let tags = StaticTagLister::default();
        let outdated = StaticOutdatedChecker::default();

        let ctx = DetectionContext::new(temp.path(), &tags, &outdated);

        assert!(ctx.manifest().is_none());
        assert_eq!(ctx.classification(), Classification::Other);
    }
}
