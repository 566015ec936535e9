//! Core types for governance rules.

use std::path::PathBuf;

use covenant_core::{RuleId, RuleResult};

use crate::enforcement::rules::ViolationRecord;
use crate::scanner::SkippedFile;

/// Input provided to each rule by the orchestrator.
#[derive(Debug, Clone)]
pub struct RuleInput {
    /// Directory every configured path is resolved against.
    pub root: PathBuf,
}

impl RuleInput {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

/// Everything one rule produced. Only `result` enters the report; the rest
/// feeds events and the violation ledger.
#[derive(Debug, Clone)]
pub struct RuleEvaluation {
    pub result: RuleResult,
    pub violations: Vec<ViolationRecord>,
    pub skipped: Vec<SkippedFile>,
    /// Root-relative paths of verification artifacts considered.
    pub artifacts: Vec<String>,
    pub execution_time_ms: u64,
}

impl RuleEvaluation {
    pub fn new(result: RuleResult) -> Self {
        Self {
            result,
            violations: Vec::new(),
            skipped: Vec::new(),
            artifacts: Vec::new(),
            execution_time_ms: 0,
        }
    }

    pub fn with_violations(mut self, violations: Vec<ViolationRecord>) -> Self {
        self.violations = violations;
        self
    }

    pub fn with_skipped(mut self, skipped: Vec<SkippedFile>) -> Self {
        self.skipped = skipped;
        self
    }

    pub fn with_artifacts(mut self, artifacts: Vec<String>) -> Self {
        self.artifacts = artifacts;
        self
    }
}

/// A governance rule: a pure function of its configuration and the root.
///
/// Implementations never fail; every problem is expressed in the outcome.
pub trait GovernanceRule: Send + Sync {
    fn id(&self) -> RuleId;
    fn evaluate(&self, input: &RuleInput) -> RuleEvaluation;
}

/// `[a, b, c]`
pub(crate) fn bracketed<S: AsRef<str>>(items: &[S]) -> String {
    let joined = items
        .iter()
        .map(|s| s.as_ref())
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{joined}]")
}
