//! Identifiers of the four governance rules, in evaluation order.

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleId {
    VerificationSingularity,
    CanonicalImmutability,
    ProhibitedLanguage,
    PhaseBoundaries,
}

impl RuleId {
    /// Report key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::VerificationSingularity => "verification_singularity",
            Self::CanonicalImmutability => "canonical_immutability",
            Self::ProhibitedLanguage => "prohibited_language",
            Self::PhaseBoundaries => "phase_boundaries",
        }
    }

    /// 1-based position in the fixed evaluation order.
    pub fn number(&self) -> u8 {
        match self {
            Self::VerificationSingularity => 1,
            Self::CanonicalImmutability => 2,
            Self::ProhibitedLanguage => 3,
            Self::PhaseBoundaries => 4,
        }
    }

    /// Progress label, e.g. "verification singularity".
    pub fn title(&self) -> &'static str {
        match self {
            Self::VerificationSingularity => "verification singularity",
            Self::CanonicalImmutability => "canonical immutability",
            Self::ProhibitedLanguage => "prohibited language",
            Self::PhaseBoundaries => "phase boundaries",
        }
    }

    pub fn all() -> &'static [RuleId] {
        &[
            Self::VerificationSingularity,
            Self::CanonicalImmutability,
            Self::ProhibitedLanguage,
            Self::PhaseBoundaries,
        ]
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RuleId {
    type Err = String;

    /// Accepts the report key (`phase_boundaries`), its kebab-case form, or
    /// the rule number.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_");
        Self::all()
            .iter()
            .copied()
            .find(|r| r.as_str() == normalized || r.number().to_string() == normalized)
            .ok_or_else(|| {
                format!(
                    "unknown rule '{s}' (expected one of: {})",
                    Self::all()
                        .iter()
                        .map(|r| r.as_str())
                        .collect::<Vec<_>>()
                        .join(", ")
                )
            })
    }
}
