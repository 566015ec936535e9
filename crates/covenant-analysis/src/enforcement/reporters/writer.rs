//! Persistence of the compliance report and the violation ledger.

use std::path::{Path, PathBuf};

use covenant_core::config::ReportConfig;
use covenant_core::errors::ReportError;
use covenant_core::events::types::{ArtifactKind, ReportWrittenEvent};
use covenant_core::events::EventDispatcher;

use super::json::JsonReporter;
use super::Reporter;
use crate::enforcement::gates::RunOutput;

/// Paths of the artifacts a run wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenArtifacts {
    pub report: PathBuf,
    /// Present only when prohibited language was found.
    pub violations: Option<PathBuf>,
}

/// Write the violation ledger (when non-empty) and the compliance report
/// into `output_dir`. A failure here is the only way a run aborts.
pub fn write_artifacts(
    output_dir: &Path,
    config: &ReportConfig,
    output: &RunOutput,
    dispatcher: &EventDispatcher,
) -> Result<WrittenArtifacts, ReportError> {
    std::fs::create_dir_all(output_dir).map_err(|source| ReportError::Write {
        path: output_dir.to_path_buf(),
        source,
    })?;

    let violations = if output.violations.is_empty() {
        None
    } else {
        let path = output_dir.join(config.effective_violations_file());
        let body = serde_json::to_string_pretty(&output.violations).map_err(|e| {
            ReportError::Serialize {
                artifact: "violation ledger".to_string(),
                message: e.to_string(),
            }
        })?;
        write_file(&path, &body)?;
        tracing::info!(path = %path.display(), count = output.violations.len(), "violation ledger written");
        dispatcher.emit_report_written(&ReportWrittenEvent {
            kind: ArtifactKind::ViolationLedger,
            path: path.clone(),
        });
        Some(path)
    };

    let report = output_dir.join(config.effective_report_file());
    let body = JsonReporter
        .generate(&output.report)
        .map_err(|message| ReportError::Serialize {
            artifact: "compliance report".to_string(),
            message,
        })?;
    write_file(&report, &body)?;
    tracing::info!(path = %report.display(), "compliance report written");
    dispatcher.emit_report_written(&ReportWrittenEvent {
        kind: ArtifactKind::ComplianceReport,
        path: report.clone(),
    });

    Ok(WrittenArtifacts { report, violations })
}

fn write_file(path: &Path, body: &str) -> Result<(), ReportError> {
    std::fs::write(path, body).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enforcement::report::ComplianceReport;
    use crate::enforcement::rules::ViolationRecord;
    use covenant_core::errors::CovenantErrorCode;
    use covenant_core::{RuleId, RuleResult};

    fn output(violations: Vec<ViolationRecord>) -> RunOutput {
        RunOutput {
            report: ComplianceReport::new(
                vec![(RuleId::ProhibitedLanguage, RuleResult::compliance("ok"))],
                "2025-12-19T00:00:00Z",
            ),
            violations,
            skipped: Vec::new(),
        }
    }

    #[test]
    fn ledger_only_written_when_needed() {
        let dir = tempfile::tempdir().unwrap();
        let written = write_artifacts(
            dir.path(),
            &ReportConfig::default(),
            &output(vec![]),
            &EventDispatcher::new(),
        )
        .unwrap();
        assert!(written.report.ends_with("governance-report.json"));
        assert!(written.report.is_file());
        assert!(written.violations.is_none());
        assert!(!dir.path().join("governance-violations.json").exists());
    }

    #[test]
    fn ledger_is_json_array_of_records() {
        let dir = tempfile::tempdir().unwrap();
        let record = ViolationRecord {
            file: "README.md".to_string(),
            category: "hype".to_string(),
            matched: "flawless system".to_string(),
            line: 1,
            context: "A flawless system".to_string(),
        };
        let written = write_artifacts(
            dir.path(),
            &ReportConfig::default(),
            &output(vec![record.clone(), record]),
            &EventDispatcher::new(),
        )
        .unwrap();
        let text = std::fs::read_to_string(written.violations.unwrap()).unwrap();
        let parsed: Vec<ViolationRecord> = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed.len(), 2);
    }

    #[test]
    fn unwritable_destination_is_report_error() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("not-a-dir");
        std::fs::write(&blocker, "").unwrap();
        let err = write_artifacts(
            &blocker,
            &ReportConfig::default(),
            &output(vec![]),
            &EventDispatcher::new(),
        )
        .unwrap_err();
        assert_eq!(err.error_code(), "REPORT_WRITE_FAILED");
    }
}
