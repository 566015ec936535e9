//! Console progress: one line per rule, framed by a header and the final outcome.

use std::sync::Mutex;

use covenant_core::constants::VERSION;
use covenant_core::events::types::{
    ArtifactKind, ReportWrittenEvent, RuleEvaluatedEvent, RuleStartedEvent, RunCompleteEvent,
    RunStartedEvent,
};
use covenant_core::events::CovenantEventHandler;
use covenant_core::Outcome;

const RULE_WIDTH: usize = 60;

/// Prints run progress to stdout. The footer follows the compliance report
/// being written, so it is the last thing a pipeline log shows.
#[derive(Default)]
pub struct ProgressPrinter {
    outcome: Mutex<Option<Outcome>>,
}

impl ProgressPrinter {
    fn rule() -> String {
        "=".repeat(RULE_WIDTH)
    }
}

impl CovenantEventHandler for ProgressPrinter {
    fn on_run_started(&self, event: &RunStartedEvent) {
        println!("{}", Self::rule());
        println!("Governance Compliance Check (covenant {VERSION})");
        println!("Root: {}", event.root.display());
        println!("{}", Self::rule());
    }

    fn on_rule_started(&self, event: &RuleStartedEvent) {
        println!("\n[RULE {}] Checking {}...", event.rule.number(), event.rule.title());
    }

    fn on_rule_evaluated(&self, event: &RuleEvaluatedEvent) {
        println!("  -> {}: {}", event.result.outcome(), event.result.message());
    }

    fn on_run_complete(&self, event: &RunCompleteEvent) {
        if let Ok(mut outcome) = self.outcome.lock() {
            *outcome = Some(event.outcome);
        }
    }

    fn on_report_written(&self, event: &ReportWrittenEvent) {
        if event.kind != ArtifactKind::ComplianceReport {
            return;
        }
        let outcome = self.outcome.lock().ok().and_then(|o| *o);
        if let Some(outcome) = outcome {
            println!("\n{}", Self::rule());
            println!("FINAL OUTCOME: {outcome}");
            println!("{}", Self::rule());
        }
    }
}
