//! The aggregate compliance report.

use chrono::{SecondsFormat, Utc};
use covenant_core::{Outcome, RuleId, RuleResult};
use serde::ser::{SerializeMap, Serializer};
use serde::Serialize;

/// `{outcome, timestamp, checks}` where `checks` maps rule key to
/// `{outcome, message}` in evaluation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceReport {
    outcome: Outcome,
    timestamp: String,
    #[serde(serialize_with = "serialize_checks")]
    checks: Vec<(RuleId, RuleResult)>,
}

impl ComplianceReport {
    /// Overall outcome is compliance iff every check is compliance.
    pub fn new(checks: Vec<(RuleId, RuleResult)>, timestamp: impl Into<String>) -> Self {
        let outcome = Outcome::aggregate(checks.iter().map(|(_, r)| r.outcome()));
        Self {
            outcome,
            timestamp: timestamp.into(),
            checks,
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn checks(&self) -> &[(RuleId, RuleResult)] {
        &self.checks
    }

    pub fn check(&self, rule: RuleId) -> Option<&RuleResult> {
        self.checks
            .iter()
            .find(|(id, _)| *id == rule)
            .map(|(_, r)| r)
    }

    pub fn exit_code(&self) -> u8 {
        self.outcome.exit_code()
    }
}

fn serialize_checks<S: Serializer>(
    checks: &[(RuleId, RuleResult)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(checks.len()))?;
    for (rule, result) in checks {
        map.serialize_entry(rule.as_str(), result)?;
    }
    map.end()
}

/// The pinned timestamp when set, otherwise now in UTC, RFC 3339, second
/// precision, `Z` suffix.
pub fn resolve_timestamp(pinned: Option<&str>) -> String {
    match pinned {
        Some(ts) if !ts.trim().is_empty() => ts.trim().to_string(),
        _ => Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
    }
}
