//! Enforcement layer: governance rules and their pass/fail contract.
//!
//! Subsystems:
//! - `rules`: violation records emitted by the language rule
//! - `supersession`: the ledger consulted when several verification records exist
//! - `language`: categorized prohibited-language matching with negation guards
//! - `boundaries`: forbidden phase claims over whole documents
//! - `gates`: the four rule evaluators and the fixed-order orchestrator
//! - `report`: the aggregate compliance report
//! - `reporters`: JSON and console output, artifact persistence

pub mod boundaries;
pub mod gates;
pub mod language;
pub mod report;
pub mod reporters;
pub mod rules;
pub mod supersession;
