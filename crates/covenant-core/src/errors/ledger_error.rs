//! Supersession ledger errors.

use super::error_code::{self, CovenantErrorCode};

/// Errors that can occur while loading the supersession ledger.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("Supersession ledger not found: {path}")]
    Missing { path: String },

    #[error("Cannot read supersession file {path}: {message}")]
    Unreadable { path: String, message: String },

    #[error("Error reading supersession file {path}: {message}")]
    Parse { path: String, message: String },

    #[error("Supersession ledger field {field} must not be empty")]
    EmptyPath { field: String },
}

impl CovenantErrorCode for LedgerError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Missing { .. } => error_code::LEDGER_MISSING,
            _ => error_code::LEDGER_MALFORMED,
        }
    }
}
