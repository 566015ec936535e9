//! Pattern compilation errors.

use super::error_code::{self, CovenantErrorCode};

/// Errors raised when configured patterns cannot be compiled.
#[derive(Debug, thiserror::Error)]
pub enum PatternError {
    #[error("Invalid pattern in category {category}: {pattern} ({message})")]
    InvalidRegex {
        category: String,
        pattern: String,
        message: String,
    },

    #[error("Pattern category {name} has no patterns")]
    EmptyCategory { name: String },

    #[error("Invalid marker set: {0}")]
    InvalidMarkers(String),
}

impl CovenantErrorCode for PatternError {
    fn error_code(&self) -> &'static str {
        error_code::PATTERN_INVALID
    }
}
