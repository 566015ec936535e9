//! The ternary rule outcome and the per-rule result pair.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Verdict of a single governance rule.
///
/// `NoDeterministicOutcome` means the rule could not be applied (its subject
/// is absent). It is reported as such per rule, but never counts as
/// compliance when results are aggregated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Outcome {
    DeterministicCompliance,
    DeterministicViolation,
    NoDeterministicOutcome,
}

impl Outcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DeterministicCompliance => "DETERMINISTIC_COMPLIANCE",
            Self::DeterministicViolation => "DETERMINISTIC_VIOLATION",
            Self::NoDeterministicOutcome => "NO_DETERMINISTIC_OUTCOME",
        }
    }

    pub fn all() -> &'static [Outcome] {
        &[
            Self::DeterministicCompliance,
            Self::DeterministicViolation,
            Self::NoDeterministicOutcome,
        ]
    }

    pub fn is_compliant(&self) -> bool {
        matches!(self, Self::DeterministicCompliance)
    }

    /// Process exit status for this outcome.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::DeterministicCompliance => 0,
            Self::DeterministicViolation => 1,
            Self::NoDeterministicOutcome => 1,
        }
    }

    /// Fold rule outcomes into the overall outcome: compliance iff every
    /// outcome is compliance. An empty set is compliant.
    pub fn aggregate<I>(outcomes: I) -> Outcome
    where
        I: IntoIterator<Item = Outcome>,
    {
        if outcomes.into_iter().all(|o| o.is_compliant()) {
            Self::DeterministicCompliance
        } else {
            Self::DeterministicViolation
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Outcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|o| o.as_str() == s)
            .ok_or_else(|| format!("unknown outcome: {s}"))
    }
}

/// Outcome plus a human-readable explanation, produced once per rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleResult {
    outcome: Outcome,
    message: String,
}

impl RuleResult {
    pub fn new(outcome: Outcome, message: impl Into<String>) -> Self {
        Self {
            outcome,
            message: message.into(),
        }
    }

    pub fn compliance(message: impl Into<String>) -> Self {
        Self::new(Outcome::DeterministicCompliance, message)
    }

    pub fn violation(message: impl Into<String>) -> Self {
        Self::new(Outcome::DeterministicViolation, message)
    }

    pub fn indeterminate(message: impl Into<String>) -> Self {
        Self::new(Outcome::NoDeterministicOutcome, message)
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for RuleResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.outcome, self.message)
    }
}
