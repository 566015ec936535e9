//! Event payloads.

use std::path::PathBuf;

use crate::types::{Outcome, RuleId, RuleResult};

#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub root: PathBuf,
    pub rules: Vec<RuleId>,
}

#[derive(Debug, Clone)]
pub struct RuleStartedEvent {
    pub rule: RuleId,
}

#[derive(Debug, Clone)]
pub struct RuleEvaluatedEvent {
    pub rule: RuleId,
    pub result: RuleResult,
    pub duration_ms: u64,
}

#[derive(Debug, Clone)]
pub struct FileSkippedEvent {
    pub rule: RuleId,
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone)]
pub struct ArtifactDiscoveredEvent {
    pub path: String,
}

#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub outcome: Outcome,
    pub rules_evaluated: usize,
}

/// Which output artifact was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArtifactKind {
    ComplianceReport,
    ViolationLedger,
}

#[derive(Debug, Clone)]
pub struct ReportWrittenEvent {
    pub kind: ArtifactKind,
    pub path: PathBuf,
}
