//! Step definitions.
//!
//! - [`Step`] - One checklist entry: id, summary and its detection rule
//! - [`DetectionRule`] - The predicate a step evaluates against a package
//! - [`Outcome`] - What a detection rule can conclude
//! - [`StepStatus`] - The final status of a step in a run

use std::fmt;

use super::context::DetectionContext;

/// What a detection rule concludes about a package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    /// The convention is followed.
    Satisfied,
    /// The convention is not followed.
    Violated,
    /// The convention does not apply to this package.
    Irrelevant,
}

/// Final status of a step within one evaluation run.
///
/// Unlike [`Outcome`] this includes [`StepStatus::Omitted`], which only the
/// engine can assign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepStatus {
    /// The convention is followed.
    Satisfied,
    /// The convention is not followed.
    Violated,
    /// The convention does not apply to this package.
    Irrelevant,
    /// The step was excluded by configuration.
    Omitted,
}

impl StepStatus {
    /// Glyph shown in the console table and the HTML report.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Satisfied => "✅",
            Self::Violated => "⛔",
            Self::Irrelevant | Self::Omitted => "🔕",
        }
    }

    /// Lowercase name, e.g. for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Satisfied => "satisfied",
            Self::Violated => "violated",
            Self::Irrelevant => "irrelevant",
            Self::Omitted => "omitted",
        }
    }

    /// Whether this status counts as a violation.
    pub fn is_violation(self) -> bool {
        self == Self::Violated
    }
}

impl From<Outcome> for StepStatus {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Satisfied => Self::Satisfied,
            Outcome::Violated => Self::Violated,
            Outcome::Irrelevant => Self::Irrelevant,
        }
    }
}

impl fmt::Display for StepStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A predicate over the state of a package directory.
///
/// Rules must not fail: anything that goes wrong while probing degrades to
/// [`Outcome::Violated`].
pub trait DetectionRule: Send + Sync {
    /// Evaluate the rule for the package described by `ctx`.
    fn evaluate(&self, ctx: &DetectionContext<'_>) -> Outcome;
}

/// One entry of the checklist.
pub struct Step {
    id: &'static str,
    summary: &'static str,
    rule: Box<dyn DetectionRule>,
}

impl Step {
    /// Create a step from its id, summary and rule.
    pub fn new(id: &'static str, summary: &'static str, rule: impl DetectionRule + 'static) -> Self {
        Self {
            id,
            summary,
            rule: Box::new(rule),
        }
    }

    /// Stable identifier, as used in configuration files.
    pub fn id(&self) -> &'static str {
        self.id
    }

    /// Human-readable description of the convention.
    pub fn summary(&self) -> &'static str {
        self.summary
    }

    /// Run the step's detection rule.
    pub fn detect(&self, ctx: &DetectionContext<'_>) -> Outcome {
        self.rule.evaluate(ctx)
    }
}

impl fmt::Debug for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Step")
            .field("id", &self.id)
            .field("summary", &self.summary)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outcome_converts_to_status() {
        assert_eq!(StepStatus::from(Outcome::Satisfied), StepStatus::Satisfied);
        assert_eq!(StepStatus::from(Outcome::Violated), StepStatus::Violated);
        assert_eq!(StepStatus::from(Outcome::Irrelevant), StepStatus::Irrelevant);
    }

    #[test]
    fn glyphs() {
        assert_eq!(StepStatus::Satisfied.glyph(), "✅");
        assert_eq!(StepStatus::Violated.glyph(), "⛔");
        assert_eq!(StepStatus::Irrelevant.glyph(), "🔕");
        assert_eq!(StepStatus::Omitted.glyph(), "🔕");
    }

    #[test]
    fn only_violated_is_a_violation() {
        assert!(StepStatus::Violated.is_violation());
        assert!(!StepStatus::Satisfied.is_violation());
        assert!(!StepStatus::Irrelevant.is_violation());
        assert!(!StepStatus::Omitted.is_violation());
    }

    #[test]
    fn status_display() {
        assert_eq!(StepStatus::Omitted.to_string(), "omitted");
    }

    #[test]
    fn step_debug_omits_rule() {
        struct Always;
        impl DetectionRule for Always {
            fn evaluate(&self, _ctx: &DetectionContext<'_>) -> Outcome {
                Outcome::Satisfied
            }
        }

        let step = Step::new("readme", "Provide a README.", Always);
        let debug = format!("{:?}", step);
        assert!(debug.contains("readme"));
        assert_eq!(step.summary(), "Provide a README.");
    }
}
