//! Governance rules and fixed-order orchestration.

pub mod canonical_immutability;
pub mod orchestrator;
pub mod phase_boundaries;
pub mod prohibited_language;
pub mod types;
pub mod verification_singularity;

pub use canonical_immutability::CanonicalImmutabilityRule;
pub use orchestrator::{RuleOrchestrator, RunOutput};
pub use phase_boundaries::PhaseBoundariesRule;
pub use prohibited_language::ProhibitedLanguageRule;
pub use types::{GovernanceRule, RuleEvaluation, RuleInput};
pub use verification_singularity::VerificationSingularityRule;
