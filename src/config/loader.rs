//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use super::schema::Configuration;
use super::validator::validate_mapping;
use crate::error::{AnalyserError, Result};
use crate::steps::StepRegistry;

/// Resolve a configuration file name against the working directory.
///
/// Absolute paths are returned unchanged.
pub fn resolve_config_path(working_dir: &Path, name: impl AsRef<Path>) -> PathBuf {
    let name = name.as_ref();
    if name.is_absolute() {
        name.to_path_buf()
    } else {
        working_dir.join(name)
    }
}

/// Load and validate a configuration file.
///
/// Returns `Ok(None)` when the file does not exist or does not contain a
/// YAML mapping; both mean "run with defaults".
///
/// # Errors
///
/// Returns `ConfigParseError` if the YAML is invalid and
/// `InvalidConfiguration` if it fails validation.
pub fn load_configuration(path: &Path, registry: &StepRegistry) -> Result<Option<Configuration>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            debug!("No configuration at {}", path.display());
            return Ok(None);
        }
        Err(e) => return Err(AnalyserError::Io(e)),
    };

    let config = parse_configuration(&content, path, registry)?;
    Ok(config.map(|mut config| {
        config.source = Some(fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf()));
        config
    }))
}

/// Parse and validate YAML configuration content.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_configuration(
    content: &str,
    source_path: &Path,
    registry: &StepRegistry,
) -> Result<Option<Configuration>> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(content).map_err(|e| AnalyserError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;

    match value.as_mapping() {
        Some(mapping) => validate_mapping(mapping, registry).map(Some),
        None => {
            debug!(
                "Configuration at {} is not a mapping, ignoring it",
                source_path.display()
            );
            Ok(None)
        }
    }
}
