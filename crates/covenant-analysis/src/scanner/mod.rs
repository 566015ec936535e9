//! Scanner: artifact discovery, classification, and content digests.

pub mod classifier;
pub mod hasher;
pub mod reader;
pub mod types;
pub mod walker;

pub use classifier::ArtifactClassifier;
pub use types::{ScanOutcome, ScanStats, SkippedFile, VerificationArtifact};
pub use walker::ArtifactScanner;
