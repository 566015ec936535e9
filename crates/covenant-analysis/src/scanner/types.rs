//! Scanner types.

use std::path::PathBuf;
use std::time::Duration;

/// A document recognised as an execution/verification record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VerificationArtifact {
    /// Absolute (or root-joined) path on disk.
    pub path: PathBuf,
    /// Path relative to the scan root, always `/`-separated.
    pub relative: String,
}

/// A file the scanner could not read and skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedFile {
    pub path: PathBuf,
    pub reason: String,
}

/// Statistics about one discovery pass.
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Regular files seen under the search roots.
    pub files_visited: usize,
    /// Files excluded by a name fragment.
    pub skipped_excluded_name: usize,
    /// Files with an extension that is never read.
    pub skipped_extension: usize,
    /// Files that could not be decoded or opened.
    pub skipped_unreadable: usize,
    /// Verification artifacts found.
    pub artifacts_found: usize,
    /// Wall time of the pass.
    pub duration: Duration,
}

/// Result of a discovery pass.
#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    /// Artifacts in traversal order (sorted by file name per directory).
    pub artifacts: Vec<VerificationArtifact>,
    pub skipped: Vec<SkippedFile>,
    pub stats: ScanStats,
}
