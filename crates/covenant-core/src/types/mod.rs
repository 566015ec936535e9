//! Shared rule types.

pub mod outcome;
pub mod rule_id;

pub use outcome::{Outcome, RuleResult};
pub use rule_id::RuleId;
