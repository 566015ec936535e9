//! CovenantEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Handlers override only the events they care about.
pub trait CovenantEventHandler: Send + Sync {
    // ---- Run lifecycle ----
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}

    // ---- Rules ----
    fn on_rule_started(&self, _event: &RuleStartedEvent) {}
    fn on_rule_evaluated(&self, _event: &RuleEvaluatedEvent) {}

    // ---- Scanning ----
    fn on_file_skipped(&self, _event: &FileSkippedEvent) {}
    fn on_artifact_discovered(&self, _event: &ArtifactDiscoveredEvent) {}

    // ---- Output ----
    fn on_report_written(&self, _event: &ReportWrittenEvent) {}
}
