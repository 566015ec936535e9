//! Shared constants for the Covenant governance engine.

/// Covenant version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project configuration file, looked up in the scan root.
pub const PROJECT_CONFIG_FILE: &str = "covenant.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "COVENANT_LOG";

/// Fallback tracing filter when `COVENANT_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "covenant=info";

// ---- Repository layout ----

/// Directory holding the implementation documents. Invoking the CLI from
/// inside it makes the parent the scan root.
pub const DEFAULT_IMPLEMENTATION_DIR: &str = "Diamond-Phase1-Implementation";

/// Canonical specification, relative to the scan root.
pub const DEFAULT_CANONICAL_PATH: &str = "Diamond-Certification-Website-Specification.md";

/// Known-good SHA-256 of the canonical specification (uppercase hex).
pub const DEFAULT_CANONICAL_SHA256: &str =
    "DDF4D97A6E6F696A34B07F2FE255663749F59BD2D83807E67120B970C452F6C7";

/// Supersession ledger, relative to the scan root.
pub const DEFAULT_LEDGER_PATH: &str =
    "Diamond-Phase1-Implementation/verification/VERIFICATION_SUPERSESSION.json";

// ---- Scanning ----

/// Directories never descended into.
pub const DEFAULT_SKIP_DIRS: &[&str] = &[".git", "node_modules", ".github"];

/// Extensions of files read during artifact discovery.
pub const DEFAULT_TEXT_EXTENSIONS: &[&str] = &["md", "txt", "json"];

/// File-name fragments that exclude a file from artifact discovery.
pub const DEFAULT_EXCLUDE_NAME_FRAGMENTS: &[&str] =
    &["GOVERNANCE", "COMPLIANCE-REPORT", "SUPERSESSION"];

/// Tokens marking a document as an execution/verification record.
pub const DEFAULT_VERIFICATION_INDICATORS: &[&str] = &[
    "Execution Status:",
    "Outcome Classification:",
    "Final Outcome:",
    "VERIFICATION_COMPLETE",
    "VERIFICATION_EVIDENCE",
];

/// Tokens asserting a deterministic outcome.
pub const DEFAULT_OUTCOME_MARKERS: &[&str] =
    &["DETERMINISTIC_COMPLIANCE", "DETERMINISTIC_VIOLATION"];

// ---- Integrity ----

/// Read chunk size for streaming digests.
pub const DEFAULT_HASH_CHUNK_SIZE: usize = 4096;

/// Largest accepted read chunk size (16 MiB).
pub const MAX_HASH_CHUNK_SIZE: usize = 16 * 1024 * 1024;

// ---- Prohibited language ----

/// Documents scanned line by line for prohibited language.
pub const DEFAULT_LANGUAGE_TARGETS: &[&str] = &[
    "Diamond-Phase1-Implementation/DESIGN-SYSTEM.md",
    "Diamond-Phase1-Implementation/HOMEPAGE-IMPLEMENTATION.md",
    "Diamond-Phase1-Implementation/ADDITIONAL-PAGES.md",
    "Diamond-Phase1-Implementation/REMAINING-PAGES.md",
    "Diamond-Phase1-Implementation/FINAL-ASSETS-DEPLOYMENT.md",
    "Diamond-Phase1-Implementation/README.md",
];

/// Trimmed-line prefixes marking code or markup rather than prose.
pub const DEFAULT_NON_PROSE_MARKERS: &[&str] = &["//", "*", "<"];

/// Width in characters of the window checked for negations before a match.
pub const DEFAULT_NEGATION_WINDOW: usize = 32;

/// Words that hedge a claim when they precede it.
pub const DEFAULT_NEGATION_WORDS: &[&str] = &[
    "not", "no", "never", "cannot", "can't", "don't", "doesn't", "won't", "isn't",
];

/// Maximum characters kept from a line as violation context.
pub const DEFAULT_CONTEXT_CHARS: usize = 80;

// ---- Phase boundaries ----

/// Documents checked for claims that excluded features are implemented.
pub const DEFAULT_BOUNDARY_TARGETS: &[&str] = &[
    "Diamond-Phase1-Implementation/README.md",
    "Diamond-Phase1-Implementation/REMAINING-PAGES.md",
];

/// Claims that an excluded Phase-1 feature ships.
pub const DEFAULT_FORBIDDEN_CLAIMS: &[&str] = &[
    r"implemented\s+real\s+billing",
    r"live\s+certification\s+issuance\s+complete",
    r"production\s+audit\s+replay\s+ready",
    r"live\s+API\s+backend\s+deployed",
];

// ---- Reports ----

/// Compliance report file name.
pub const DEFAULT_REPORT_FILE: &str = "governance-report.json";

/// Violation ledger file name, written only when prohibited language is found.
pub const DEFAULT_VIOLATIONS_FILE: &str = "governance-violations.json";
