//! Scanner errors.

use std::io;
use std::path::{Path, PathBuf};

use super::error_code::{self, CovenantErrorCode};

/// Errors that can occur while reading candidate documents.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("IO error scanning {path}: {source}")]
    IoError { path: PathBuf, source: io::Error },

    #[error("Permission denied: {path}")]
    PermissionDenied { path: PathBuf },

    #[error("Unsupported encoding in {path}: {encoding}")]
    UnsupportedEncoding { path: PathBuf, encoding: String },
}

impl ScanError {
    /// Classify an I/O failure on `path`.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::PermissionDenied => Self::PermissionDenied {
                path: path.to_path_buf(),
            },
            io::ErrorKind::InvalidData => Self::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "non-UTF-8".to_string(),
            },
            _ => Self::IoError {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Unreadable files are skipped during scanning; anything else is a
    /// genuine I/O failure.
    pub fn is_skippable(&self) -> bool {
        matches!(
            self,
            Self::PermissionDenied { .. } | Self::UnsupportedEncoding { .. }
        )
    }
}

impl CovenantErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::IoError { .. } => error_code::SCAN_ERROR,
            Self::PermissionDenied { .. } => error_code::PERMISSION_DENIED,
            Self::UnsupportedEncoding { .. } => error_code::UNSUPPORTED_ENCODING,
        }
    }
}
