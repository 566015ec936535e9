//! covenant-analysis: the governance rule engine.
//!
//! - `scanner`: artifact discovery, classification, streaming digests
//! - `enforcement`: the four rules, supersession ledger, language and
//!   phase-boundary matchers, the orchestrator, and reporters

pub mod enforcement;
pub mod scanner;

pub use enforcement::gates::{GovernanceRule, RuleOrchestrator, RunOutput};
pub use enforcement::report::ComplianceReport;
