//! covenant-core: foundation crate for the Covenant governance engine.
//!
//! Everything the rule evaluators share lives here:
//! - Types: the ternary `Outcome`, `RuleResult`, `RuleId`
//! - Errors: one `thiserror` enum per subsystem
//! - Config: TOML-based layered configuration
//! - Events: synchronous rule lifecycle dispatch
//! - Tracing: `COVENANT_LOG`-driven subscriber setup

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use config::CovenantConfig;
pub use types::{Outcome, RuleId, RuleResult};
