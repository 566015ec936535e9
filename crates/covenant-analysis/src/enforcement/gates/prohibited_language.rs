//! Rule 3: no prohibited rhetoric in the target documents.

use covenant_core::config::{LanguageConfig, ReportConfig};
use covenant_core::errors::{CovenantErrorCode, PatternError};
use covenant_core::{RuleId, RuleResult};

use super::types::{GovernanceRule, RuleEvaluation, RuleInput};
use crate::enforcement::language::LanguageScanner;
use crate::scanner::reader::read_text;
use crate::scanner::SkippedFile;

pub struct ProhibitedLanguageRule {
    scanner: LanguageScanner,
    targets: Vec<String>,
    violations_file: String,
}

impl ProhibitedLanguageRule {
    pub fn new(config: &LanguageConfig, report: &ReportConfig) -> Result<Self, PatternError> {
        Ok(Self {
            scanner: LanguageScanner::from_config(config)?,
            targets: config.effective_targets(),
            violations_file: report.effective_violations_file(),
        })
    }
}

impl GovernanceRule for ProhibitedLanguageRule {
    fn id(&self) -> RuleId {
        RuleId::ProhibitedLanguage
    }

    fn evaluate(&self, input: &RuleInput) -> RuleEvaluation {
        let mut violations = Vec::new();
        let mut skipped = Vec::new();

        for target in &self.targets {
            let path = input.root.join(target);
            if !path.is_file() {
                tracing::debug!(file = %target, "language target absent, skipping");
                continue;
            }
            match read_text(&path) {
                Ok(text) => violations.extend(self.scanner.scan_text(target, &text)),
                Err(e) => {
                    tracing::warn!(file = %target, error = %e.coded_string(), "language target unreadable, skipping");
                    skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let result = if violations.is_empty() {
            RuleResult::compliance("No prohibited language detected")
        } else {
            RuleResult::violation(format!(
                "Found {} prohibited language violations (see {})",
                violations.len(),
                self.violations_file
            ))
        };

        RuleEvaluation::new(result)
            .with_violations(violations)
            .with_skipped(skipped)
    }
}
