//! Rule 1: exactly one authoritative verification record.
//!
//! Zero records is a violation. More than one requires a supersession
//! ledger that accounts for every record found.

use covenant_core::config::ScanConfig;
use covenant_core::errors::{CovenantErrorCode, LedgerError, PatternError};
use covenant_core::{RuleId, RuleResult};

use super::types::{bracketed, GovernanceRule, RuleEvaluation, RuleInput};
use crate::enforcement::supersession::SupersessionLedger;
use crate::scanner::ArtifactScanner;

pub struct VerificationSingularityRule {
    scanner: ArtifactScanner,
    ledger_path: String,
    ledger_file_name: String,
}

impl VerificationSingularityRule {
    pub fn new(config: &ScanConfig) -> Result<Self, PatternError> {
        Ok(Self {
            scanner: ArtifactScanner::new(config)?,
            ledger_path: config.effective_ledger_path(),
            ledger_file_name: config.ledger_file_name(),
        })
    }

    fn check_supersession(&self, input: &RuleInput, artifacts: &[String]) -> RuleResult {
        let path = input.root.join(&self.ledger_path);
        match SupersessionLedger::load(&path, &self.ledger_path) {
            Err(LedgerError::Missing { .. }) => RuleResult::violation(format!(
                "Multiple verification artifacts without supersession: {}",
                bracketed(artifacts)
            )),
            Err(e) => {
                tracing::warn!(ledger = %self.ledger_path, error = %e.coded_string(), "supersession ledger rejected");
                RuleResult::violation(e.to_string())
            }
            Ok(ledger) => {
                let unaccounted = ledger.unaccounted(artifacts);
                if unaccounted.is_empty() {
                    RuleResult::compliance("Verification singularity maintained via supersession")
                } else {
                    RuleResult::violation(format!(
                        "Verification artifacts not in supersession record: {}",
                        bracketed(&unaccounted)
                    ))
                }
            }
        }
    }
}

impl GovernanceRule for VerificationSingularityRule {
    fn id(&self) -> RuleId {
        RuleId::VerificationSingularity
    }

    fn evaluate(&self, input: &RuleInput) -> RuleEvaluation {
        let scan = self.scanner.scan(&input.root);
        let artifacts: Vec<String> = scan
            .artifacts
            .iter()
            .filter(|a| !a.relative.contains(self.ledger_file_name.as_str()))
            .map(|a| a.relative.clone())
            .collect();

        let result = match artifacts.as_slice() {
            [] => RuleResult::violation("No verification artifacts found"),
            [only] => RuleResult::compliance(format!("Single verification artifact: {only}")),
            _ => self.check_supersession(input, &artifacts),
        };

        RuleEvaluation::new(result)
            .with_artifacts(artifacts)
            .with_skipped(scan.skipped)
    }
}
