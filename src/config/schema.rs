//! Configuration schema.

use std::collections::BTreeSet;
use std::path::PathBuf;

/// Default configuration file name.
pub const CONFIGURATION_FILE: &str = ".pa.yml";

/// Key listing step ids to omit.
pub const STEPS_TO_OMIT_KEY: &str = "stepsToOmit";

/// Key holding the number of tolerated violations.
pub const VIOLATION_THRESHOLD_KEY: &str = "violationThreshold";

/// Validated analysis configuration.
///
/// ```yaml
/// stepsToOmit:
///   - peck
///   - rector
/// violationThreshold: 2
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Configuration {
    /// Ids of steps to mark as omitted. All are known step ids.
    pub steps_to_omit: BTreeSet<String>,

    /// Violations tolerated before the run fails, if configured.
    pub violation_threshold: Option<usize>,

    /// File the configuration was read from.
    pub source: Option<PathBuf>,
}

impl Configuration {
    /// The threshold to apply: an explicit override wins over the file,
    /// and the default is zero.
    pub fn effective_threshold(&self, override_threshold: Option<usize>) -> usize {
        override_threshold
            .or(self.violation_threshold)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_empty() {
        let config = Configuration::default();
        assert!(config.steps_to_omit.is_empty());
        assert_eq!(config.violation_threshold, None);
        assert_eq!(config.effective_threshold(None), 0);
    }

    #[test]
    fn override_wins_over_file() {
        let config = Configuration {
            violation_threshold: Some(3),
            ..Default::default()
        };
        assert_eq!(config.effective_threshold(None), 3);
        assert_eq!(config.effective_threshold(Some(0)), 0);
        assert_eq!(config.effective_threshold(Some(7)), 7);
    }
}
