//! Prohibited-language matching.
//!
//! Each configured category holds case-insensitive patterns tested line by
//! line. Lookaround from the pattern table is expressed as two checks on a
//! candidate match: a fixed-width preceding window tested against negation
//! words, and an optional trailing regex that must not follow the match.

pub mod negation;
pub mod patterns;
pub mod scanner;

pub use negation::{preceding_window, NegationGuard};
pub use patterns::{CompiledCategory, CompiledPattern, PatternSet};
pub use scanner::LanguageScanner;
