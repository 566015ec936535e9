//! UTF-8 document reading with skippable failure classification.

use std::path::Path;

use covenant_core::errors::ScanError;

/// Read a whole document as UTF-8.
///
/// Invalid UTF-8 surfaces as `ScanError::UnsupportedEncoding`, permission
/// failures as `ScanError::PermissionDenied`; both are skippable.
pub fn read_text(path: &Path) -> Result<String, ScanError> {
    std::fs::read_to_string(path).map_err(|e| ScanError::from_io(path, e))
}
