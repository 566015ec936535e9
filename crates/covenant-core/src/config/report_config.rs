//! Output artifact configuration.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_REPORT_FILE, DEFAULT_VIOLATIONS_FILE};

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory receiving the artifacts. Default: the working directory.
    pub output_dir: Option<String>,
    /// Compliance report file name. Default: "governance-report.json".
    pub report_file: Option<String>,
    /// Violation ledger file name. Default: "governance-violations.json".
    pub violations_file: Option<String>,
    /// Fixed RFC 3339 timestamp for reproducible reports. Default: now (UTC).
    pub timestamp: Option<String>,
}

impl ReportConfig {
    pub fn effective_report_file(&self) -> String {
        self.report_file
            .clone()
            .unwrap_or_else(|| DEFAULT_REPORT_FILE.to_string())
    }

    pub fn effective_violations_file(&self) -> String {
        self.violations_file
            .clone()
            .unwrap_or_else(|| DEFAULT_VIOLATIONS_FILE.to_string())
    }

    /// Resolve the output directory against `cwd`.
    pub fn output_dir_in(&self, cwd: &Path) -> PathBuf {
        match &self.output_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        }
    }
}
