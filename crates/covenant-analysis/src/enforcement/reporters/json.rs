//! JSON reporter: the persisted `governance-report.json` document.

use super::Reporter;
use crate::enforcement::report::ComplianceReport;

/// Pretty-printed with two-space indentation.
pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, report: &ComplianceReport) -> Result<String, String> {
        serde_json::to_string_pretty(report).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::{RuleId, RuleResult};

    #[test]
    fn output_parses_back() {
        let report = ComplianceReport::new(
            vec![(RuleId::PhaseBoundaries, RuleResult::compliance("Phase-1 boundaries respected"))],
            "2025-12-19T00:00:00Z",
        );
        let text = JsonReporter.generate(&report).unwrap();
        assert!(text.contains("\n  \"outcome\""));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["outcome"], "DETERMINISTIC_COMPLIANCE");
        assert_eq!(
            value["checks"]["phase_boundaries"]["message"],
            "Phase-1 boundaries respected"
        );
    }
}
