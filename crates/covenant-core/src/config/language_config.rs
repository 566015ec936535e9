//! Prohibited-language configuration, including the default pattern table.

use serde::{Deserialize, Serialize};

use super::or_defaults;
use crate::constants::{
    DEFAULT_CONTEXT_CHARS, DEFAULT_LANGUAGE_TARGETS, DEFAULT_NEGATION_WINDOW,
    DEFAULT_NEGATION_WORDS, DEFAULT_NON_PROSE_MARKERS,
};

/// A single prohibited-language pattern.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternConfig {
    /// Regex matched case-insensitively against one line.
    pub regex: String,
    /// Discard a match when a negation word occurs in the window before it.
    #[serde(default)]
    pub negation_guard: bool,
    /// Discard a match when the text right after it matches this regex.
    #[serde(default)]
    pub not_followed_by: Option<String>,
}

impl PatternConfig {
    pub fn plain(regex: &str) -> Self {
        Self {
            regex: regex.to_string(),
            negation_guard: false,
            not_followed_by: None,
        }
    }

    pub fn guarded(regex: &str) -> Self {
        Self {
            negation_guard: true,
            ..Self::plain(regex)
        }
    }

    pub fn not_followed_by(mut self, regex: &str) -> Self {
        self.not_followed_by = Some(regex.to_string());
        self
    }
}

/// A named group of patterns; the name becomes the violation category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryConfig {
    pub name: String,
    pub patterns: Vec<PatternConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LanguageConfig {
    /// Documents scanned line by line, relative to the root.
    pub targets: Vec<String>,
    /// Trimmed-line prefixes that mark code or markup.
    pub non_prose_markers: Vec<String>,
    /// Characters before a match searched for negations. Default: 32.
    pub negation_window: Option<usize>,
    /// Words that hedge a following claim.
    pub negation_words: Vec<String>,
    /// Characters of trimmed line kept as context. Default: 80.
    pub context_chars: Option<usize>,
    /// Replaces the built-in category table when non-empty.
    pub categories: Vec<CategoryConfig>,
}

impl LanguageConfig {
    pub fn effective_targets(&self) -> Vec<String> {
        or_defaults(&self.targets, DEFAULT_LANGUAGE_TARGETS)
    }

    pub fn effective_non_prose_markers(&self) -> Vec<String> {
        or_defaults(&self.non_prose_markers, DEFAULT_NON_PROSE_MARKERS)
    }

    pub fn effective_negation_window(&self) -> usize {
        self.negation_window.unwrap_or(DEFAULT_NEGATION_WINDOW)
    }

    pub fn effective_negation_words(&self) -> Vec<String> {
        or_defaults(&self.negation_words, DEFAULT_NEGATION_WORDS)
    }

    pub fn effective_context_chars(&self) -> usize {
        self.context_chars.unwrap_or(DEFAULT_CONTEXT_CHARS)
    }

    pub fn effective_categories(&self) -> Vec<CategoryConfig> {
        if self.categories.is_empty() {
            default_categories()
        } else {
            self.categories.clone()
        }
    }
}

/// Built-in prohibited-language table, in reporting order.
pub fn default_categories() -> Vec<CategoryConfig> {
    let category = |name: &str, patterns: Vec<PatternConfig>| CategoryConfig {
        name: name.to_string(),
        patterns,
    };

    vec![
        category(
            "anthropomorphization",
            vec![
                PatternConfig::guarded(
                    r"\b(AI|system)\s+(understands|feels|thinks|wants|believes)\b",
                ),
                PatternConfig::plain(r"\b(AI|system)\s+(intention|emotion|consciousness|awareness)\b"),
                PatternConfig::plain(r"\bthe\s+AI\s+is\s+(smart|intelligent|clever|wise)\b"),
            ],
        ),
        category(
            "guarantees",
            vec![
                PatternConfig::guarded(r"\b(we\s+guarantee|guaranteed\s+to)\b"),
                PatternConfig::guarded(r"\b(will\s+always|will\s+never)\b")
                    .not_followed_by(r"\s+fails"),
                PatternConfig::plain(r"\b(100%|completely)\s+(guaranteed|safe|secure)\b"),
            ],
        ),
        category(
            "advisory",
            vec![
                PatternConfig::plain(
                    r"\b(we\s+recommend|you\s+should|must\s+use)\s+.*\s+(for|in)\s+(legal|medical|financial)\s+transactions\b",
                ),
                PatternConfig::plain(r"\bthis\s+will\s+ensure\s+compliance\s+with\b"),
            ],
        ),
        category(
            "refusal_demonization",
            vec![
                PatternConfig::plain(
                    r"NO_DETERMINISTIC_OUTCOME.*\b(means\s+fail|indicates\s+failure|is\s+an\s+error)\b",
                ),
                PatternConfig::plain(r"\brefusal\s+(is|means|indicates)\s+(failure|error|bug)\b"),
            ],
        ),
        category(
            "mystification",
            vec![
                PatternConfig::plain(r"\b(magically|mystically|miraculously)\s+(determines|evaluates)\b"),
                PatternConfig::plain(r"\bblack\s+box\s+magic\b"),
            ],
        ),
        category(
            "hype",
            vec![
                PatternConfig::plain(r"\b(revolutionary|groundbreaking|unprecedented)\s+AI\b"),
                PatternConfig::plain(r"\b(never\s+fails|perfect|flawless|infallible)\s+system\b"),
                PatternConfig::plain(r"\bworld['-]s\s+(first|best|only)\b"),
            ],
        ),
    ]
}
