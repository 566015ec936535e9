//! Report persistence errors. These are the only errors allowed to end a run.

use std::path::PathBuf;

use super::error_code::{self, CovenantErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to serialize {artifact}: {message}")]
    Serialize { artifact: String, message: String },

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

impl CovenantErrorCode for ReportError {
    fn error_code(&self) -> &'static str {
        error_code::REPORT_WRITE_FAILED
    }
}
