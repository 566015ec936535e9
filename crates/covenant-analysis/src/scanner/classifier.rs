//! Content-signature classification of verification artifacts.

use aho_corasick::AhoCorasick;
use covenant_core::errors::PatternError;

/// Recognises verification records by literal tokens.
///
/// A document qualifies iff it contains at least one indicator token AND at
/// least one outcome marker. Matching is exact and case-sensitive.
#[derive(Debug, Clone)]
pub struct ArtifactClassifier {
    indicators: AhoCorasick,
    outcome_markers: AhoCorasick,
}

impl ArtifactClassifier {
    pub fn new(indicators: &[String], outcome_markers: &[String]) -> Result<Self, PatternError> {
        if indicators.is_empty() || outcome_markers.is_empty() {
            return Err(PatternError::InvalidMarkers(
                "indicator and outcome marker sets must both be non-empty".to_string(),
            ));
        }
        Ok(Self {
            indicators: build(indicators)?,
            outcome_markers: build(outcome_markers)?,
        })
    }

    pub fn is_verification_artifact(&self, content: &str) -> bool {
        self.indicators.is_match(content) && self.outcome_markers.is_match(content)
    }
}

fn build(tokens: &[String]) -> Result<AhoCorasick, PatternError> {
    AhoCorasick::new(tokens).map_err(|e| PatternError::InvalidMarkers(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::constants::{DEFAULT_OUTCOME_MARKERS, DEFAULT_VERIFICATION_INDICATORS};

    fn classifier() -> ArtifactClassifier {
        let owned = |v: &[&str]| v.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        ArtifactClassifier::new(
            &owned(DEFAULT_VERIFICATION_INDICATORS),
            &owned(DEFAULT_OUTCOME_MARKERS),
        )
        .unwrap()
    }

    #[test]
    fn requires_indicator_and_outcome() {
        let c = classifier();
        assert!(c.is_verification_artifact("Final Outcome: DETERMINISTIC_COMPLIANCE"));
        assert!(!c.is_verification_artifact("Final Outcome: pending"));
        assert!(!c.is_verification_artifact("DETERMINISTIC_VIOLATION only"));
    }

    #[test]
    fn matching_is_case_sensitive() {
        let c = classifier();
        assert!(!c.is_verification_artifact("final outcome: deterministic_compliance"));
    }

    #[test]
    fn empty_marker_set_rejected() {
        assert!(ArtifactClassifier::new(&[], &["X".to_string()]).is_err());
    }
}
