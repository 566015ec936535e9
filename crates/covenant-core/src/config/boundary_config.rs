//! Phase-boundary configuration.

use serde::{Deserialize, Serialize};

use super::or_defaults;
use crate::constants::{DEFAULT_BOUNDARY_TARGETS, DEFAULT_FORBIDDEN_CLAIMS};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct BoundaryConfig {
    /// Documents read in full, relative to the root.
    pub targets: Vec<String>,
    /// Case-insensitive regexes claiming an excluded feature ships.
    pub forbidden_claims: Vec<String>,
}

impl BoundaryConfig {
    pub fn effective_targets(&self) -> Vec<String> {
        or_defaults(&self.targets, DEFAULT_BOUNDARY_TARGETS)
    }

    pub fn effective_forbidden_claims(&self) -> Vec<String> {
        or_defaults(&self.forbidden_claims, DEFAULT_FORBIDDEN_CLAIMS)
    }
}
