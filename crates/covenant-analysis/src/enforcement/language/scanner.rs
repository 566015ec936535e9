//! Line-by-line prohibited-language scanner.

use covenant_core::config::LanguageConfig;
use covenant_core::errors::PatternError;

use super::negation::NegationGuard;
use super::patterns::PatternSet;
use crate::enforcement::rules::ViolationRecord;

/// Scans documents for every configured category.
#[derive(Debug, Clone)]
pub struct LanguageScanner {
    patterns: PatternSet,
    guard: NegationGuard,
    non_prose_markers: Vec<String>,
    context_chars: usize,
}

impl LanguageScanner {
    pub fn from_config(config: &LanguageConfig) -> Result<Self, PatternError> {
        Ok(Self {
            patterns: PatternSet::compile(&config.effective_categories())?,
            guard: NegationGuard::new(
                &config.effective_negation_words(),
                config.effective_negation_window(),
            )?,
            non_prose_markers: config.effective_non_prose_markers(),
            context_chars: config.effective_context_chars(),
        })
    }

    /// Records for `text`, attributed to `file`, in line then category then
    /// pattern order.
    pub fn scan_text(&self, file: &str, text: &str) -> Vec<ViolationRecord> {
        let mut records = Vec::new();
        for (index, line) in text.lines().enumerate() {
            let trimmed = line.trim();
            if self.is_non_prose(trimmed) {
                continue;
            }
            for category in self.patterns.categories() {
                for pattern in &category.patterns {
                    if let Some(matched) = pattern.find(line, &self.guard) {
                        records.push(ViolationRecord {
                            file: file.to_string(),
                            category: category.name.clone(),
                            matched: matched.to_string(),
                            line: index + 1,
                            context: self.context(trimmed),
                        });
                    }
                }
            }
        }
        records
    }

    fn is_non_prose(&self, trimmed: &str) -> bool {
        self.non_prose_markers
            .iter()
            .any(|m| trimmed.starts_with(m.as_str()))
    }

    fn context(&self, trimmed: &str) -> String {
        trimmed.chars().take(self.context_chars).collect()
    }
}
