//! Whole-document forbidden-claim matching.

use std::fmt;

use covenant_core::config::BoundaryConfig;
use covenant_core::errors::PatternError;
use regex::{Regex, RegexBuilder};

/// A forbidden claim found in a target document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoundaryViolation {
    pub file: String,
    pub pattern: String,
}

impl fmt::Display for BoundaryViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.file, self.pattern)
    }
}

#[derive(Debug, Clone)]
pub struct BoundaryScanner {
    claims: Vec<Regex>,
}

impl BoundaryScanner {
    pub fn from_config(config: &BoundaryConfig) -> Result<Self, PatternError> {
        let claims = config
            .effective_forbidden_claims()
            .iter()
            .map(|pattern| {
                RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .build()
                    .map_err(|e| PatternError::InvalidRegex {
                        category: "forbidden_claims".to_string(),
                        pattern: pattern.clone(),
                        message: e.to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { claims })
    }

    /// One violation per claim pattern present anywhere in `content`.
    pub fn scan(&self, file: &str, content: &str) -> Vec<BoundaryViolation> {
        self.claims
            .iter()
            .filter(|claim| claim.is_match(content))
            .map(|claim| BoundaryViolation {
                file: file.to_string(),
                pattern: claim.as_str().to_string(),
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scanner() -> BoundaryScanner {
        BoundaryScanner::from_config(&BoundaryConfig::default()).unwrap()
    }

    #[test]
    fn claim_across_line_break_detected() {
        let found = scanner().scan("README.md", "We have implemented\nreal billing.");
        assert_eq!(
            found,
            vec![BoundaryViolation {
                file: "README.md".to_string(),
                pattern: r"implemented\s+real\s+billing".to_string(),
            }]
        );
    }

    #[test]
    fn case_insensitive_and_multiple() {
        let text = "LIVE API BACKEND DEPLOYED; production audit replay ready";
        let found = scanner().scan("R.md", text);
        assert_eq!(found.len(), 2);
        // Reported in configured order, not text order.
        assert_eq!(found[0].pattern, r"production\s+audit\s+replay\s+ready");
    }

    #[test]
    fn compliant_text_yields_nothing() {
        assert!(scanner()
            .scan("README.md", "Billing is out of scope for this phase.")
            .is_empty());
    }
}
