//! Shared fixture builders for rule integration tests.

#![allow(dead_code)]

use std::path::Path;

use covenant_analysis::scanner::hasher::sha256_reader;
use covenant_core::CovenantConfig;

pub const IMPL: &str = "Diamond-Phase1-Implementation";
pub const CANONICAL: &str = "Diamond-Certification-Website-Specification.md";
pub const CANONICAL_BODY: &str = "# Canonical specification\n\nDo not edit.\n";

pub const ARTIFACT_BODY: &str =
    "# Execution record\n\nExecution Status: complete\nFinal Outcome: DETERMINISTIC_COMPLIANCE\n";

pub fn write(root: &Path, relative: &str, body: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, body).unwrap();
}

/// Config whose expected digest matches `CANONICAL_BODY`.
pub fn config() -> CovenantConfig {
    let mut config = CovenantConfig::default();
    config.integrity.expected_digest =
        Some(sha256_reader(CANONICAL_BODY.as_bytes(), 4096).unwrap());
    config
}

/// A root that passes every rule.
pub fn compliant_root() -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    write(root, CANONICAL, CANONICAL_BODY);
    write(root, &format!("{IMPL}/verification/EXEC-1.md"), ARTIFACT_BODY);
    write(root, &format!("{IMPL}/README.md"), "# Phase 1\n\nStatic pages only.\n");
    dir
}
