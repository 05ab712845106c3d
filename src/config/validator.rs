//! Configuration validation.
//!
//! Validation runs on the raw YAML mapping so that each problem can be
//! reported against the key that caused it:
//! - `violationThreshold` must be a non-negative integer
//! - `stepsToOmit` must be a sequence
//! - every entry of `stepsToOmit` must name a registered step

use std::collections::BTreeSet;

use serde_yaml::{Mapping, Value};

use super::schema::{Configuration, STEPS_TO_OMIT_KEY, VIOLATION_THRESHOLD_KEY};
use crate::error::{AnalyserError, Result};
use crate::steps::StepRegistry;

fn invalid(message: impl Into<String>) -> AnalyserError {
    AnalyserError::InvalidConfiguration {
        message: message.into(),
    }
}

/// Validate a parsed configuration mapping against the registry.
///
/// # Errors
///
/// Returns `InvalidConfiguration` with a message naming the first problem.
pub fn validate_mapping(mapping: &Mapping, registry: &StepRegistry) -> Result<Configuration> {
    let violation_threshold = match mapping.get(VIOLATION_THRESHOLD_KEY) {
        None => None,
        Some(value) => Some(validate_threshold(value)?),
    };

    let steps_to_omit = match mapping.get(STEPS_TO_OMIT_KEY) {
        None => BTreeSet::new(),
        Some(value) => validate_steps_to_omit(value, registry)?,
    };

    Ok(Configuration {
        steps_to_omit,
        violation_threshold,
        source: None,
    })
}

fn validate_threshold(value: &Value) -> Result<usize> {
    value
        .as_u64()
        .and_then(|n| usize::try_from(n).ok())
        .ok_or_else(|| invalid("No numeric violation threshold provided."))
}

fn validate_steps_to_omit(value: &Value, registry: &StepRegistry) -> Result<BTreeSet<String>> {
    let entries = value
        .as_sequence()
        .ok_or_else(|| invalid("No array of steps to omit provided."))?;

    let mut steps = BTreeSet::new();
    for entry in entries {
        let id = scalar_text(entry);
        match entry.as_str() {
            Some(id) if registry.has_step(id) => {
                steps.insert(id.to_string());
            }
            _ => return Err(invalid(format!("Unknown step '{}' provided.", id))),
        }
    }

    Ok(steps)
}

fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
    }
}
