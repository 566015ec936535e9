//! Rule 2: the canonical document matches its recorded SHA-256.

use covenant_core::config::IntegrityConfig;
use covenant_core::{RuleId, RuleResult};

use super::types::{GovernanceRule, RuleEvaluation, RuleInput};
use crate::scanner::hasher::{digests_match, sha256_file};
use crate::scanner::SkippedFile;

pub struct CanonicalImmutabilityRule {
    canonical_path: String,
    expected_digest: String,
    chunk_size: usize,
}

impl CanonicalImmutabilityRule {
    pub fn new(config: &IntegrityConfig) -> Self {
        Self {
            canonical_path: config.effective_canonical_path(),
            expected_digest: config.effective_expected_digest().trim().to_ascii_uppercase(),
            chunk_size: config.effective_chunk_size(),
        }
    }
}

impl GovernanceRule for CanonicalImmutabilityRule {
    fn id(&self) -> RuleId {
        RuleId::CanonicalImmutability
    }

    fn evaluate(&self, input: &RuleInput) -> RuleEvaluation {
        let path = input.root.join(&self.canonical_path);
        if !path.is_file() {
            return RuleEvaluation::new(RuleResult::indeterminate(format!(
                "Canonical artifact not found: {}",
                self.canonical_path
            )));
        }

        match sha256_file(&path, self.chunk_size) {
            Ok(actual) if digests_match(&self.expected_digest, &actual) => {
                RuleEvaluation::new(RuleResult::compliance(
                    "Canonical artifact unchanged (SHA256 verified)",
                ))
            }
            Ok(actual) => RuleEvaluation::new(RuleResult::violation(format!(
                "Canonical artifact modified. Expected: {}, Got: {}",
                self.expected_digest, actual
            ))),
            // Present but unreadable: the rule still has no subject.
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "canonical artifact unreadable");
                RuleEvaluation::new(RuleResult::indeterminate(format!(
                    "Canonical artifact unreadable: {}: {}",
                    self.canonical_path, e
                )))
                .with_skipped(vec![SkippedFile {
                    path,
                    reason: e.to_string(),
                }])
            }
        }
    }
}
