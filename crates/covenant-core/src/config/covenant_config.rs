//! Top-level Covenant configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{BoundaryConfig, IntegrityConfig, LanguageConfig, ReportConfig, ScanConfig};
use crate::constants::{MAX_HASH_CHUNK_SIZE, PROJECT_CONFIG_FILE};
use crate::errors::ConfigError;

/// Immutable rule configuration, injected into every evaluator.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`COVENANT_*`)
/// 3. Project config (`covenant.toml` in the scan root)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CovenantConfig {
    pub scan: ScanConfig,
    pub integrity: IntegrityConfig,
    pub language: LanguageConfig,
    pub boundaries: BoundaryConfig,
    pub report: ReportConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output_dir: Option<String>,
    pub report_timestamp: Option<String>,
    pub expected_digest: Option<String>,
    pub ledger_path: Option<String>,
}

impl CovenantConfig {
    /// Load configuration for the scan rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_config_path = root.join(PROJECT_CONFIG_FILE);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
            tracing::debug!(path = %project_config_path.display(), "merged project config");
        }

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &CovenantConfig) -> Result<(), ConfigError> {
        let digest = config.integrity.effective_expected_digest();
        if digest.len() != 64 || !digest.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ConfigError::ValidationFailed {
                field: "integrity.expected_digest".to_string(),
                message: "must be a 64-character hex SHA-256 digest".to_string(),
            });
        }
        let chunk_size = config.integrity.effective_chunk_size();
        if chunk_size == 0 || chunk_size > MAX_HASH_CHUNK_SIZE {
            return Err(ConfigError::ValidationFailed {
                field: "integrity.chunk_size".to_string(),
                message: format!("must be between 1 and {MAX_HASH_CHUNK_SIZE} bytes"),
            });
        }
        if config.language.effective_negation_window() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "language.negation_window".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.language.effective_context_chars() == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "language.context_chars".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.scan.effective_ledger_path().trim().is_empty() {
            return Err(ConfigError::ValidationFailed {
                field: "scan.ledger_path".to_string(),
                message: "must not be empty".to_string(),
            });
        }
        if let Some(category) = config
            .language
            .categories
            .iter()
            .find(|c| c.name.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: "language.categories".to_string(),
                message: format!("category with patterns {:?} has no name", category.patterns),
            });
        }
        Ok(())
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut CovenantConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: CovenantConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    fn merge(base: &mut CovenantConfig, other: &CovenantConfig) {
        fn take<T: Clone>(base: &mut Option<T>, other: &Option<T>) {
            if other.is_some() {
                base.clone_from(other);
            }
        }
        fn take_vec<T: Clone>(base: &mut Vec<T>, other: &[T]) {
            if !other.is_empty() {
                *base = other.to_vec();
            }
        }

        // Scan
        take(&mut base.scan.implementation_dir, &other.scan.implementation_dir);
        take_vec(&mut base.scan.search_roots, &other.scan.search_roots);
        take_vec(&mut base.scan.skip_dirs, &other.scan.skip_dirs);
        take_vec(&mut base.scan.extensions, &other.scan.extensions);
        take_vec(
            &mut base.scan.exclude_name_fragments,
            &other.scan.exclude_name_fragments,
        );
        take_vec(&mut base.scan.indicators, &other.scan.indicators);
        take_vec(&mut base.scan.outcome_markers, &other.scan.outcome_markers);
        take(&mut base.scan.ledger_path, &other.scan.ledger_path);

        // Integrity
        take(&mut base.integrity.canonical_path, &other.integrity.canonical_path);
        take(&mut base.integrity.expected_digest, &other.integrity.expected_digest);
        take(&mut base.integrity.chunk_size, &other.integrity.chunk_size);

        // Language
        take_vec(&mut base.language.targets, &other.language.targets);
        take_vec(
            &mut base.language.non_prose_markers,
            &other.language.non_prose_markers,
        );
        take(&mut base.language.negation_window, &other.language.negation_window);
        take_vec(&mut base.language.negation_words, &other.language.negation_words);
        take(&mut base.language.context_chars, &other.language.context_chars);
        take_vec(&mut base.language.categories, &other.language.categories);

        // Boundaries
        take_vec(&mut base.boundaries.targets, &other.boundaries.targets);
        take_vec(
            &mut base.boundaries.forbidden_claims,
            &other.boundaries.forbidden_claims,
        );

        // Report
        take(&mut base.report.output_dir, &other.report.output_dir);
        take(&mut base.report.report_file, &other.report.report_file);
        take(&mut base.report.violations_file, &other.report.violations_file);
        take(&mut base.report.timestamp, &other.report.timestamp);
    }

    fn apply_env_overrides(config: &mut CovenantConfig) {
        if let Ok(val) = std::env::var("COVENANT_IMPLEMENTATION_DIR") {
            config.scan.implementation_dir = Some(val);
        }
        if let Ok(val) = std::env::var("COVENANT_LEDGER_PATH") {
            config.scan.ledger_path = Some(val);
        }
        if let Ok(val) = std::env::var("COVENANT_CANONICAL_PATH") {
            config.integrity.canonical_path = Some(val);
        }
        if let Ok(val) = std::env::var("COVENANT_CANONICAL_DIGEST") {
            config.integrity.expected_digest = Some(val);
        }
        if let Ok(val) = std::env::var("COVENANT_NEGATION_WINDOW") {
            if let Ok(v) = val.parse::<usize>() {
                config.language.negation_window = Some(v);
            }
        }
        if let Ok(val) = std::env::var("COVENANT_OUTPUT_DIR") {
            config.report.output_dir = Some(val);
        }
        if let Ok(val) = std::env::var("COVENANT_REPORT_TIMESTAMP") {
            config.report.timestamp = Some(val);
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut CovenantConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.output_dir {
            config.report.output_dir = Some(v.clone());
        }
        if let Some(ref v) = cli.report_timestamp {
            config.report.timestamp = Some(v.clone());
        }
        if let Some(ref v) = cli.expected_digest {
            config.integrity.expected_digest = Some(v.clone());
        }
        if let Some(ref v) = cli.ledger_path {
            config.scan.ledger_path = Some(v.clone());
        }
    }

    /// Copy of this config with every default spelled out.
    pub fn resolved(&self) -> CovenantConfig {
        CovenantConfig {
            scan: ScanConfig {
                implementation_dir: Some(self.scan.effective_implementation_dir()),
                search_roots: self.scan.effective_search_roots(),
                skip_dirs: self.scan.effective_skip_dirs(),
                extensions: self.scan.effective_extensions(),
                exclude_name_fragments: self.scan.effective_exclude_name_fragments(),
                indicators: self.scan.effective_indicators(),
                outcome_markers: self.scan.effective_outcome_markers(),
                ledger_path: Some(self.scan.effective_ledger_path()),
            },
            integrity: IntegrityConfig {
                canonical_path: Some(self.integrity.effective_canonical_path()),
                expected_digest: Some(self.integrity.effective_expected_digest()),
                chunk_size: Some(self.integrity.effective_chunk_size()),
            },
            language: LanguageConfig {
                targets: self.language.effective_targets(),
                non_prose_markers: self.language.effective_non_prose_markers(),
                negation_window: Some(self.language.effective_negation_window()),
                negation_words: self.language.effective_negation_words(),
                context_chars: Some(self.language.effective_context_chars()),
                categories: self.language.effective_categories(),
            },
            boundaries: BoundaryConfig {
                targets: self.boundaries.effective_targets(),
                forbidden_claims: self.boundaries.effective_forbidden_claims(),
            },
            report: ReportConfig {
                output_dir: self.report.output_dir.clone(),
                report_file: Some(self.report.effective_report_file()),
                violations_file: Some(self.report.effective_violations_file()),
                timestamp: self.report.timestamp.clone(),
            },
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
