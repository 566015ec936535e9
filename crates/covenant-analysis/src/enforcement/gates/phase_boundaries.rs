//! Rule 4: no document claims an excluded phase feature is implemented.

use covenant_core::config::BoundaryConfig;
use covenant_core::errors::{CovenantErrorCode, PatternError};
use covenant_core::{RuleId, RuleResult};

use super::types::{bracketed, GovernanceRule, RuleEvaluation, RuleInput};
use crate::enforcement::boundaries::BoundaryScanner;
use crate::scanner::reader::read_text;
use crate::scanner::SkippedFile;

pub struct PhaseBoundariesRule {
    scanner: BoundaryScanner,
    targets: Vec<String>,
}

impl PhaseBoundariesRule {
    pub fn new(config: &BoundaryConfig) -> Result<Self, PatternError> {
        Ok(Self {
            scanner: BoundaryScanner::from_config(config)?,
            targets: config.effective_targets(),
        })
    }
}

impl GovernanceRule for PhaseBoundariesRule {
    fn id(&self) -> RuleId {
        RuleId::PhaseBoundaries
    }

    fn evaluate(&self, input: &RuleInput) -> RuleEvaluation {
        let mut found = Vec::new();
        let mut skipped = Vec::new();

        for target in &self.targets {
            let path = input.root.join(target);
            if !path.is_file() {
                continue;
            }
            match read_text(&path) {
                Ok(content) => found.extend(self.scanner.scan(target, &content)),
                Err(e) => {
                    tracing::warn!(file = %target, error = %e.coded_string(), "boundary target unreadable, skipping");
                    skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                }
            }
        }

        let result = if found.is_empty() {
            RuleResult::compliance("Phase-1 boundaries respected")
        } else {
            let pairs: Vec<String> = found.iter().map(ToString::to_string).collect();
            RuleResult::violation(format!("Phase boundary violation: {}", bracketed(&pairs)))
        };

        RuleEvaluation::new(result).with_skipped(skipped)
    }
}
