//! Supersession ledger: which verification record is authoritative and
//! which ones it replaced.

pub mod ledger;

pub use ledger::SupersessionLedger;
