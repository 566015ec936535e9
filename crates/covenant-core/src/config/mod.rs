//! Configuration system for Covenant.
//! TOML-based, layered resolution: CLI > env > project > defaults.

pub mod boundary_config;
pub mod covenant_config;
pub mod integrity_config;
pub mod language_config;
pub mod report_config;
pub mod scan_config;

pub use boundary_config::BoundaryConfig;
pub use covenant_config::{CliOverrides, CovenantConfig};
pub use integrity_config::IntegrityConfig;
pub use language_config::{CategoryConfig, LanguageConfig, PatternConfig};
pub use report_config::ReportConfig;
pub use scan_config::ScanConfig;

/// Returns `configured` when non-empty, otherwise the compiled defaults.
pub(crate) fn or_defaults(configured: &[String], defaults: &[&str]) -> Vec<String> {
    if configured.is_empty() {
        defaults.iter().map(|s| s.to_string()).collect()
    } else {
        configured.to_vec()
    }
}
