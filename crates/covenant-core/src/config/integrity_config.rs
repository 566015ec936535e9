//! Canonical artifact integrity configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CANONICAL_PATH, DEFAULT_CANONICAL_SHA256, DEFAULT_HASH_CHUNK_SIZE};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct IntegrityConfig {
    /// Canonical file, relative to the root.
    pub canonical_path: Option<String>,
    /// Expected SHA-256, hex, any case.
    pub expected_digest: Option<String>,
    /// Streaming read size in bytes. Default: 4096.
    pub chunk_size: Option<usize>,
}

impl IntegrityConfig {
    pub fn effective_canonical_path(&self) -> String {
        self.canonical_path
            .clone()
            .unwrap_or_else(|| DEFAULT_CANONICAL_PATH.to_string())
    }

    pub fn effective_expected_digest(&self) -> String {
        self.expected_digest
            .clone()
            .unwrap_or_else(|| DEFAULT_CANONICAL_SHA256.to_string())
    }

    pub fn effective_chunk_size(&self) -> usize {
        self.chunk_size.unwrap_or(DEFAULT_HASH_CHUNK_SIZE)
    }
}
