//! Composer manifest reading.
//!
//! Only the handful of fields the checklist inspects are extracted, and they
//! are read leniently: a field with an unexpected shape is treated as absent
//! instead of rejecting the whole manifest.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde_json::Value;
use tracing::{debug, warn};

/// File name of the package manifest.
pub const MANIFEST_FILE: &str = "composer.json";

/// Keywords marking a package as a CLI or TUI.
pub const CLI_KEYWORDS: &[&str] = &["cli", "tui", "console"];

/// The subset of `composer.json` used by the checklist.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComposerManifest {
    /// Entries of the `keywords` array that are strings.
    pub keywords: Vec<String>,
    /// Names of the entries in `scripts`.
    pub scripts: Vec<String>,
    /// String constraints from `require`, keyed by package name.
    pub require: BTreeMap<String, String>,
}

impl ComposerManifest {
    /// Parse manifest JSON.
    pub fn parse(content: &str) -> Result<Self, serde_json::Error> {
        let value: Value = serde_json::from_str(content)?;
        Ok(Self::from_value(&value))
    }

    /// Extract the inspected fields from an already parsed document.
    pub fn from_value(value: &Value) -> Self {
        let keywords = value
            .get("keywords")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(String::from)
                    .collect()
            })
            .unwrap_or_default();

        let scripts = match value.get("scripts") {
            Some(Value::Object(map)) => map.keys().cloned().collect(),
            Some(Value::Array(items)) => (0..items.len()).map(|i| i.to_string()).collect(),
            _ => Vec::new(),
        };

        let require = value
            .get("require")
            .and_then(Value::as_object)
            .map(|map| {
                map.iter()
                    .filter_map(|(name, constraint)| {
                        constraint.as_str().map(|c| (name.clone(), c.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        Self {
            keywords,
            scripts,
            require,
        }
    }

    /// Load the manifest from a package root.
    ///
    /// Returns `None` when the file is missing, unreadable or not valid JSON.
    pub fn load(package_root: &Path) -> Option<Self> {
        let path = package_root.join(MANIFEST_FILE);
        if !path.is_file() {
            debug!("No manifest at {}", path.display());
            return None;
        }

        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) => {
                warn!("Cannot read {}: {}", path.display(), e);
                return None;
            }
        };

        match Self::parse(&content) {
            Ok(manifest) => Some(manifest),
            Err(e) => {
                warn!("Cannot parse {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Whether any keyword marks the package as a CLI or TUI.
    pub fn declares_cli_or_tui(&self) -> bool {
        self.keywords
            .iter()
            .any(|keyword| CLI_KEYWORDS.contains(&keyword.as_str()))
    }

    /// Whether at least one script entry is declared.
    pub fn has_scripts(&self) -> bool {
        !self.scripts.is_empty()
    }

    /// The declared PHP version constraint, if any.
    pub fn php_constraint(&self) -> Option<&str> {
        self.require.get("php").map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn parses_inspected_fields() {
        let manifest = ComposerManifest::parse(
            r#"{
                "name": "acme/tool",
                "keywords": ["cli", "dev"],
                "scripts": {"test": "pest", "cs-fix": "pint"},
                "require": {"php": "^8.2", "symfony/console": "^7.0"}
            }"#,
        )
        .unwrap();

        assert_eq!(manifest.keywords, vec!["cli", "dev"]);
        assert_eq!(manifest.scripts.len(), 2);
        assert_eq!(manifest.php_constraint(), Some("^8.2"));
        assert!(manifest.declares_cli_or_tui());
        assert!(manifest.has_scripts());
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let manifest = ComposerManifest::parse("{}").unwrap();
        assert_eq!(manifest, ComposerManifest::default());
        assert!(!manifest.declares_cli_or_tui());
        assert!(!manifest.has_scripts());
        assert!(manifest.php_constraint().is_none());
    }

    #[test]
    fn malformed_fields_are_ignored() {
        let manifest = ComposerManifest::parse(
            r#"{"keywords": "cli", "scripts": 3, "require": {"php": 8.1}}"#,
        )
        .unwrap();

        assert!(manifest.keywords.is_empty());
        assert!(manifest.scripts.is_empty());
        assert!(manifest.php_constraint().is_none());
    }

    #[test]
    fn non_string_keywords_are_skipped() {
        let manifest = ComposerManifest::parse(r#"{"keywords": [1, "tui", null]}"#).unwrap();
        assert_eq!(manifest.keywords, vec!["tui"]);
        assert!(manifest.declares_cli_or_tui());
    }

    #[test]
    fn keyword_match_is_exact() {
        let manifest = ComposerManifest::parse(r#"{"keywords": ["CLI", "client"]}"#).unwrap();
        assert!(!manifest.declares_cli_or_tui());
    }

    #[test]
    fn empty_scripts_object_has_no_scripts() {
        let manifest = ComposerManifest::parse(r#"{"scripts": {}}"#).unwrap();
        assert!(!manifest.has_scripts());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(ComposerManifest::parse("{not json").is_err());
    }

    #[test]
    fn load_missing_manifest_is_none() {
        let temp = TempDir::new().unwrap();
        assert!(ComposerManifest::load(temp.path()).is_none());
    }

    #[test]
    fn load_invalid_manifest_is_none() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(MANIFEST_FILE), "{broken").unwrap();
        assert!(ComposerManifest::load(temp.path()).is_none());
    }

    #[test]
    fn load_reads_manifest_from_root() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(MANIFEST_FILE),
            r#"{"keywords": ["console"]}"#,
        )
        .unwrap();

        let manifest = ComposerManifest::load(temp.path()).unwrap();
        assert!(manifest.declares_cli_or_tui());
    }
}
