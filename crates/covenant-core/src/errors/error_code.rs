//! CovenantErrorCode trait for structured error reporting.

/// Stable, machine-readable code for every Covenant error enum.
pub trait CovenantErrorCode {
    /// Returns the error code string (e.g., "SCAN_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const SCAN_ERROR: &str = "SCAN_ERROR";
pub const PERMISSION_DENIED: &str = "PERMISSION_DENIED";
pub const UNSUPPORTED_ENCODING: &str = "UNSUPPORTED_ENCODING";
pub const LEDGER_MISSING: &str = "LEDGER_MISSING";
pub const LEDGER_MALFORMED: &str = "LEDGER_MALFORMED";
pub const PATTERN_INVALID: &str = "PATTERN_INVALID";
pub const REPORT_WRITE_FAILED: &str = "REPORT_WRITE_FAILED";
