//! Fixed-order rule orchestrator.

use std::path::Path;
use std::time::Instant;

use covenant_core::config::CovenantConfig;
use covenant_core::errors::PatternError;
use covenant_core::events::types::{
    ArtifactDiscoveredEvent, FileSkippedEvent, RuleEvaluatedEvent, RuleStartedEvent,
    RunCompleteEvent, RunStartedEvent,
};
use covenant_core::events::EventDispatcher;
use covenant_core::RuleId;

use super::canonical_immutability::CanonicalImmutabilityRule;
use super::phase_boundaries::PhaseBoundariesRule;
use super::prohibited_language::ProhibitedLanguageRule;
use super::types::{GovernanceRule, RuleInput};
use super::verification_singularity::VerificationSingularityRule;
use crate::enforcement::report::ComplianceReport;
use crate::enforcement::rules::ViolationRecord;
use crate::scanner::SkippedFile;

/// What a run produced. Nothing has been written to disk yet.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub report: ComplianceReport,
    /// Prohibited-language records, in detection order.
    pub violations: Vec<ViolationRecord>,
    pub skipped: Vec<SkippedFile>,
}

/// Runs rules sequentially in rule order and aggregates the report.
pub struct RuleOrchestrator {
    rules: Vec<Box<dyn GovernanceRule>>,
    dispatcher: EventDispatcher,
}

impl RuleOrchestrator {
    /// Create an orchestrator with all four rules built from `config`.
    pub fn new(config: &CovenantConfig) -> Result<Self, PatternError> {
        let rules: Vec<Box<dyn GovernanceRule>> = vec![
            Box::new(VerificationSingularityRule::new(&config.scan)?),
            Box::new(CanonicalImmutabilityRule::new(&config.integrity)),
            Box::new(ProhibitedLanguageRule::new(&config.language, &config.report)?),
            Box::new(PhaseBoundariesRule::new(&config.boundaries)?),
        ];
        Ok(Self::with_rules(rules))
    }

    /// Create an orchestrator with custom rules. They still run in rule order.
    pub fn with_rules(mut rules: Vec<Box<dyn GovernanceRule>>) -> Self {
        rules.sort_by_key(|r| r.id());
        Self {
            rules,
            dispatcher: EventDispatcher::new(),
        }
    }

    pub fn with_dispatcher(mut self, dispatcher: EventDispatcher) -> Self {
        self.dispatcher = dispatcher;
        self
    }

    /// Keep only the listed rules. An empty list keeps all of them.
    pub fn only(mut self, selected: &[RuleId]) -> Self {
        if !selected.is_empty() {
            self.rules.retain(|r| selected.contains(&r.id()));
        }
        self
    }

    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|r| r.id()).collect()
    }

    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Evaluate every rule against `root` and build the report.
    pub fn execute(&self, root: &Path, timestamp: impl Into<String>) -> RunOutput {
        let input = RuleInput::new(root);
        self.dispatcher.emit_run_started(&RunStartedEvent {
            root: root.to_path_buf(),
            rules: self.rule_ids(),
        });

        let mut checks = Vec::with_capacity(self.rules.len());
        let mut violations = Vec::new();
        let mut skipped = Vec::new();

        for rule in &self.rules {
            let id = rule.id();
            self.dispatcher.emit_rule_started(&RuleStartedEvent { rule: id });

            let start = Instant::now();
            let mut evaluation = rule.evaluate(&input);
            evaluation.execution_time_ms = start.elapsed().as_millis() as u64;

            for artifact in &evaluation.artifacts {
                self.dispatcher
                    .emit_artifact_discovered(&ArtifactDiscoveredEvent {
                        path: artifact.clone(),
                    });
            }
            for file in &evaluation.skipped {
                self.dispatcher.emit_file_skipped(&FileSkippedEvent {
                    rule: id,
                    path: file.path.clone(),
                    reason: file.reason.clone(),
                });
            }

            tracing::info!(
                rule = %id,
                outcome = %evaluation.result.outcome(),
                duration_ms = evaluation.execution_time_ms,
                "rule evaluated"
            );
            self.dispatcher.emit_rule_evaluated(&RuleEvaluatedEvent {
                rule: id,
                result: evaluation.result.clone(),
                duration_ms: evaluation.execution_time_ms,
            });

            violations.append(&mut evaluation.violations);
            skipped.append(&mut evaluation.skipped);
            checks.push((id, evaluation.result));
        }

        let report = ComplianceReport::new(checks, timestamp);
        self.dispatcher.emit_run_complete(&RunCompleteEvent {
            outcome: report.outcome(),
            rules_evaluated: report.checks().len(),
        });

        RunOutput {
            report,
            violations,
            skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enforcement::gates::RuleEvaluation;
    use covenant_core::{Outcome, RuleResult};

    struct Fixed(RuleId, Outcome);

    impl GovernanceRule for Fixed {
        fn id(&self) -> RuleId {
            self.0
        }
        fn evaluate(&self, _input: &RuleInput) -> RuleEvaluation {
            RuleEvaluation::new(RuleResult::new(self.1, self.0.as_str()))
        }
    }

    fn all_compliant_reversed() -> Vec<Box<dyn GovernanceRule>> {
        RuleId::all()
            .iter()
            .rev()
            .map(|id| Box::new(Fixed(*id, Outcome::DeterministicCompliance)) as Box<dyn GovernanceRule>)
            .collect()
    }

    #[test]
    fn rules_run_in_rule_order() {
        let orchestrator = RuleOrchestrator::with_rules(all_compliant_reversed());
        assert_eq!(orchestrator.rule_ids(), RuleId::all());
        let output = orchestrator.execute(Path::new("."), "t");
        let keys: Vec<RuleId> = output.report.checks().iter().map(|(id, _)| *id).collect();
        assert_eq!(keys, RuleId::all());
        assert_eq!(output.report.outcome(), Outcome::DeterministicCompliance);
    }

    #[test]
    fn only_filters_and_keeps_order() {
        let orchestrator = RuleOrchestrator::with_rules(all_compliant_reversed())
            .only(&[RuleId::PhaseBoundaries, RuleId::VerificationSingularity]);
        assert_eq!(
            orchestrator.rule_ids(),
            vec![RuleId::VerificationSingularity, RuleId::PhaseBoundaries]
        );
    }

    #[test]
    fn one_indeterminate_rule_fails_the_run() {
        let rules: Vec<Box<dyn GovernanceRule>> = vec![
            Box::new(Fixed(RuleId::VerificationSingularity, Outcome::DeterministicCompliance)),
            Box::new(Fixed(RuleId::CanonicalImmutability, Outcome::NoDeterministicOutcome)),
        ];
        let output = RuleOrchestrator::with_rules(rules).execute(Path::new("."), "t");
        assert_eq!(output.report.outcome(), Outcome::DeterministicViolation);
        assert_eq!(output.report.exit_code(), 1);
    }
}
