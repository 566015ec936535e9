//! Deterministic walker for verification artifact discovery.
//!
//! Walks each configured search root with `walkdir`, sorted by file name so
//! the artifact order is stable across platforms and runs. Skip-listed
//! directories are pruned before descent; unreadable files are recorded and
//! skipped, never fatal.

use std::path::Path;
use std::time::Instant;

use covenant_core::config::ScanConfig;
use covenant_core::errors::{CovenantErrorCode, PatternError};
use walkdir::{DirEntry, WalkDir};

use super::classifier::ArtifactClassifier;
use super::reader::read_text;
use super::types::{ScanOutcome, ScanStats, SkippedFile, VerificationArtifact};

/// Finds verification artifacts under the configured search roots.
#[derive(Debug, Clone)]
pub struct ArtifactScanner {
    search_roots: Vec<String>,
    skip_dirs: Vec<String>,
    extensions: Vec<String>,
    exclude_name_fragments: Vec<String>,
    classifier: ArtifactClassifier,
}

impl ArtifactScanner {
    pub fn new(config: &ScanConfig) -> Result<Self, PatternError> {
        let classifier = ArtifactClassifier::new(
            &config.effective_indicators(),
            &config.effective_outcome_markers(),
        )?;
        Ok(Self {
            search_roots: config.effective_search_roots(),
            skip_dirs: config.effective_skip_dirs(),
            extensions: config
                .effective_extensions()
                .into_iter()
                .map(|e| e.trim_start_matches('.').to_string())
                .collect(),
            exclude_name_fragments: config.effective_exclude_name_fragments(),
            classifier,
        })
    }

    /// Scan every search root under `root`. Missing search roots are skipped.
    pub fn scan(&self, root: &Path) -> ScanOutcome {
        let start = Instant::now();
        let mut outcome = ScanOutcome::default();

        for search_root in &self.search_roots {
            let base = root.join(search_root);
            if !base.is_dir() {
                tracing::debug!(path = %base.display(), "search root absent, skipping");
                continue;
            }
            self.scan_tree(root, &base, &mut outcome);
        }

        outcome.stats.artifacts_found = outcome.artifacts.len();
        outcome.stats.duration = start.elapsed();
        log_stats(&outcome.stats);
        outcome
    }

    fn scan_tree(&self, root: &Path, base: &Path, outcome: &mut ScanOutcome) {
        let walker = WalkDir::new(base)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|e| e.depth() == 0 || !self.is_skipped_dir(e));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    let path = e.path().map(Path::to_path_buf).unwrap_or_else(|| base.to_path_buf());
                    tracing::warn!(path = %path.display(), error = %e, "walk error, skipping");
                    outcome.stats.skipped_unreadable += 1;
                    outcome.skipped.push(SkippedFile {
                        path,
                        reason: e.to_string(),
                    });
                    continue;
                }
            };
            // Symlinked files are read through the link; symlinked dirs are not entered.
            let is_file = entry.file_type().is_file()
                || (entry.path_is_symlink() && entry.path().is_file());
            if !is_file {
                continue;
            }
            outcome.stats.files_visited += 1;

            let name = entry.file_name().to_string_lossy();
            if self
                .exclude_name_fragments
                .iter()
                .any(|fragment| name.contains(fragment.as_str()))
            {
                outcome.stats.skipped_excluded_name += 1;
                continue;
            }
            if !self.has_text_extension(entry.path()) {
                outcome.stats.skipped_extension += 1;
                continue;
            }

            let content = match read_text(entry.path()) {
                Ok(c) => c,
                Err(e) => {
                    if e.is_skippable() {
                        tracing::warn!(path = %entry.path().display(), error = %e.coded_string(), "unreadable file, skipping");
                    } else {
                        tracing::warn!(path = %entry.path().display(), error = %e.coded_string(), "I/O error, skipping");
                    }
                    outcome.stats.skipped_unreadable += 1;
                    outcome.skipped.push(SkippedFile {
                        path: entry.path().to_path_buf(),
                        reason: e.to_string(),
                    });
                    continue;
                }
            };

            if self.classifier.is_verification_artifact(&content) {
                let relative = relative_slash_path(root, entry.path());
                tracing::debug!(artifact = %relative, "verification artifact discovered");
                outcome.artifacts.push(VerificationArtifact {
                    path: entry.path().to_path_buf(),
                    relative,
                });
            }
        }
    }

    fn is_skipped_dir(&self, entry: &DirEntry) -> bool {
        entry.file_type().is_dir()
            && entry
                .file_name()
                .to_str()
                .is_some_and(|name| self.skip_dirs.iter().any(|d| d == name))
    }

    fn has_text_extension(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|ext| self.extensions.iter().any(|e| e == ext))
    }
}

/// `path` relative to `root`, joined with `/` on every platform.
pub fn relative_slash_path(root: &Path, path: &Path) -> String {
    let relative = path.strip_prefix(root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

fn log_stats(stats: &ScanStats) {
    tracing::info!(
        files_visited = stats.files_visited,
        excluded_name = stats.skipped_excluded_name,
        other_extension = stats.skipped_extension,
        unreadable = stats.skipped_unreadable,
        artifacts = stats.artifacts_found,
        duration_ms = stats.duration.as_millis() as u64,
        "artifact scan complete"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_paths_use_forward_slashes() {
        let root = Path::new("/repo");
        let path = Path::new("/repo").join("impl").join("verification").join("a.md");
        assert_eq!(relative_slash_path(root, &path), "impl/verification/a.md");
    }

    #[test]
    fn stats_count_each_skip_reason() {
        let dir = tempfile::tempdir().unwrap();
        let base = dir.path().join("impl");
        std::fs::create_dir_all(base.join(".git")).unwrap();
        let record = "Final Outcome: DETERMINISTIC_COMPLIANCE\n";
        std::fs::write(base.join("EXEC.md"), record).unwrap();
        std::fs::write(base.join("GOVERNANCE.md"), record).unwrap();
        std::fs::write(base.join("run.log"), record).unwrap();
        std::fs::write(base.join("notes.txt"), "plain notes\n").unwrap();
        std::fs::write(base.join(".git").join("EXEC.md"), record).unwrap();

        let config = ScanConfig {
            search_roots: vec!["impl".to_string()],
            ..Default::default()
        };
        let outcome = ArtifactScanner::new(&config).unwrap().scan(dir.path());

        assert_eq!(outcome.stats.files_visited, 4);
        assert_eq!(outcome.stats.skipped_excluded_name, 1);
        assert_eq!(outcome.stats.skipped_extension, 1);
        assert_eq!(outcome.stats.skipped_unreadable, 0);
        assert_eq!(outcome.stats.artifacts_found, 1);
        assert_eq!(outcome.artifacts[0].relative, "impl/EXEC.md");
    }

    #[test]
    fn path_outside_root_kept_whole() {
        let rel = relative_slash_path(Path::new("/repo"), Path::new("other/a.md"));
        assert_eq!(rel, "other/a.md");
    }
}
