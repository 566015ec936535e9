//! Error handling for Covenant.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod error_code;
pub mod ledger_error;
pub mod pattern_error;
pub mod report_error;
pub mod scan_error;

pub use config_error::ConfigError;
pub use error_code::CovenantErrorCode;
pub use ledger_error::LedgerError;
pub use pattern_error::PatternError;
pub use report_error::ReportError;
pub use scan_error::ScanError;
