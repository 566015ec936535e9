//! Artifact discovery configuration.

use serde::{Deserialize, Serialize};

use super::or_defaults;
use crate::constants::{
    DEFAULT_EXCLUDE_NAME_FRAGMENTS, DEFAULT_IMPLEMENTATION_DIR, DEFAULT_LEDGER_PATH,
    DEFAULT_OUTCOME_MARKERS, DEFAULT_SKIP_DIRS, DEFAULT_TEXT_EXTENSIONS,
    DEFAULT_VERIFICATION_INDICATORS,
};

/// Configuration for the artifact scanner and the supersession ledger.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ScanConfig {
    /// Implementation subtree name. Default: "Diamond-Phase1-Implementation".
    pub implementation_dir: Option<String>,
    /// Subtrees (relative to the root) searched for verification artifacts.
    /// Default: the implementation subtree.
    pub search_roots: Vec<String>,
    /// Directory names never descended into.
    pub skip_dirs: Vec<String>,
    /// File extensions (without dot) that are read.
    pub extensions: Vec<String>,
    /// File-name fragments that exclude a file regardless of content.
    pub exclude_name_fragments: Vec<String>,
    /// Tokens marking an execution/verification record.
    pub indicators: Vec<String>,
    /// Tokens asserting a compliance or violation outcome.
    pub outcome_markers: Vec<String>,
    /// Supersession ledger path, relative to the root.
    pub ledger_path: Option<String>,
}

impl ScanConfig {
    pub fn effective_implementation_dir(&self) -> String {
        self.implementation_dir
            .clone()
            .unwrap_or_else(|| DEFAULT_IMPLEMENTATION_DIR.to_string())
    }

    pub fn effective_search_roots(&self) -> Vec<String> {
        if self.search_roots.is_empty() {
            vec![self.effective_implementation_dir()]
        } else {
            self.search_roots.clone()
        }
    }

    pub fn effective_skip_dirs(&self) -> Vec<String> {
        or_defaults(&self.skip_dirs, DEFAULT_SKIP_DIRS)
    }

    pub fn effective_extensions(&self) -> Vec<String> {
        or_defaults(&self.extensions, DEFAULT_TEXT_EXTENSIONS)
    }

    pub fn effective_exclude_name_fragments(&self) -> Vec<String> {
        or_defaults(&self.exclude_name_fragments, DEFAULT_EXCLUDE_NAME_FRAGMENTS)
    }

    pub fn effective_indicators(&self) -> Vec<String> {
        or_defaults(&self.indicators, DEFAULT_VERIFICATION_INDICATORS)
    }

    pub fn effective_outcome_markers(&self) -> Vec<String> {
        or_defaults(&self.outcome_markers, DEFAULT_OUTCOME_MARKERS)
    }

    pub fn effective_ledger_path(&self) -> String {
        self.ledger_path
            .clone()
            .unwrap_or_else(|| DEFAULT_LEDGER_PATH.to_string())
    }

    /// File name of the ledger, used to drop it from discovered artifacts.
    pub fn ledger_file_name(&self) -> String {
        let path = self.effective_ledger_path();
        path.rsplit(['/', '\\'])
            .next()
            .unwrap_or(path.as_str())
            .to_string()
    }
}
