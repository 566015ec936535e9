//! Ledger parsing and artifact accounting.

use std::path::Path;

use covenant_core::errors::LedgerError;
use serde::Deserialize;

/// Parsed supersession ledger.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupersessionLedger {
    pub authoritative: String,
    pub superseded: Vec<String>,
}

#[derive(Deserialize)]
struct LedgerFile {
    authoritative_verification: LedgerEntry,
    #[serde(default)]
    superseded_verifications: Vec<LedgerEntry>,
}

#[derive(Deserialize)]
struct LedgerEntry {
    path: String,
}

impl SupersessionLedger {
    /// Load the ledger at `path`. `display` names it in error messages.
    pub fn load(path: &Path, display: &str) -> Result<Self, LedgerError> {
        if !path.is_file() {
            return Err(LedgerError::Missing {
                path: display.to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| LedgerError::Unreadable {
            path: display.to_string(),
            message: e.to_string(),
        })?;
        Self::parse(&content, display)
    }

    pub fn parse(content: &str, display: &str) -> Result<Self, LedgerError> {
        let file: LedgerFile = serde_json::from_str(content).map_err(|e| LedgerError::Parse {
            path: display.to_string(),
            message: e.to_string(),
        })?;

        // An empty path is a substring of every artifact path.
        if file.authoritative_verification.path.is_empty() {
            return Err(LedgerError::EmptyPath {
                field: "authoritative_verification.path".to_string(),
            });
        }
        if let Some(i) = file
            .superseded_verifications
            .iter()
            .position(|e| e.path.is_empty())
        {
            return Err(LedgerError::EmptyPath {
                field: format!("superseded_verifications[{i}].path"),
            });
        }

        Ok(Self {
            authoritative: file.authoritative_verification.path,
            superseded: file
                .superseded_verifications
                .into_iter()
                .map(|e| e.path)
                .collect(),
        })
    }

    /// Whether `relative` (root-relative, `/`-separated) contains the
    /// authoritative path or any superseded path.
    pub fn accounts_for(&self, relative: &str) -> bool {
        relative.contains(self.authoritative.as_str())
            || self.superseded.iter().any(|s| relative.contains(s.as_str()))
    }

    /// The artifacts in `relatives` the ledger does not account for, in input order.
    pub fn unaccounted<'a>(&self, relatives: &'a [String]) -> Vec<&'a str> {
        relatives
            .iter()
            .filter(|r| !self.accounts_for(r))
            .map(String::as_str)
            .collect()
    }
}
