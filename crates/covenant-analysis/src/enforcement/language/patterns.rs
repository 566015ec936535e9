//! Compiled prohibited-language categories.

use covenant_core::config::{CategoryConfig, PatternConfig};
use covenant_core::errors::PatternError;
use regex::{Regex, RegexBuilder};

use super::negation::NegationGuard;

/// One pattern with its exclusion checks.
#[derive(Debug, Clone)]
pub struct CompiledPattern {
    regex: Regex,
    negation_guard: bool,
    not_followed_by: Option<Regex>,
}

impl CompiledPattern {
    fn compile(category: &str, config: &PatternConfig) -> Result<Self, PatternError> {
        let regex = case_insensitive(category, &config.regex)?;
        let not_followed_by = config
            .not_followed_by
            .as_deref()
            .map(|tail| case_insensitive(category, &format!(r"\A(?:{tail})")))
            .transpose()?;
        Ok(Self {
            regex,
            negation_guard: config.negation_guard,
            not_followed_by,
        })
    }

    /// First match in `line` that survives both exclusion checks.
    pub fn find<'t>(&self, line: &'t str, guard: &NegationGuard) -> Option<&'t str> {
        self.regex
            .find_iter(line)
            .find(|m| {
                if self.negation_guard && guard.is_negated(line, m.start()) {
                    return false;
                }
                match &self.not_followed_by {
                    Some(tail) => !tail.is_match(&line[m.end()..]),
                    None => true,
                }
            })
            .map(|m| m.as_str())
    }
}

/// A named pattern group; the name is the violation category.
#[derive(Debug, Clone)]
pub struct CompiledCategory {
    pub name: String,
    pub patterns: Vec<CompiledPattern>,
}

/// Every category, in reporting order.
#[derive(Debug, Clone)]
pub struct PatternSet {
    categories: Vec<CompiledCategory>,
}

impl PatternSet {
    pub fn compile(categories: &[CategoryConfig]) -> Result<Self, PatternError> {
        let categories = categories
            .iter()
            .map(|c| {
                if c.patterns.is_empty() {
                    return Err(PatternError::EmptyCategory {
                        name: c.name.clone(),
                    });
                }
                let patterns = c
                    .patterns
                    .iter()
                    .map(|p| CompiledPattern::compile(&c.name, p))
                    .collect::<Result<Vec<_>, _>>()?;
                Ok(CompiledCategory {
                    name: c.name.clone(),
                    patterns,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[CompiledCategory] {
        &self.categories
    }

    pub fn pattern_count(&self) -> usize {
        self.categories.iter().map(|c| c.patterns.len()).sum()
    }
}

fn case_insensitive(category: &str, pattern: &str) -> Result<Regex, PatternError> {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .build()
        .map_err(|e| PatternError::InvalidRegex {
            category: category.to_string(),
            pattern: pattern.to_string(),
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use covenant_core::config::language_config::default_categories;
    use covenant_core::constants::DEFAULT_NEGATION_WORDS;

    fn guard() -> NegationGuard {
        let words: Vec<String> = DEFAULT_NEGATION_WORDS.iter().map(|s| s.to_string()).collect();
        NegationGuard::new(&words, 32).unwrap()
    }

    fn pattern(config: PatternConfig) -> CompiledPattern {
        CompiledPattern::compile("test", &config).unwrap()
    }

    #[test]
    fn default_table_compiles() {
        let set = PatternSet::compile(&default_categories()).unwrap();
        assert_eq!(set.categories().len(), 6);
        assert_eq!(set.pattern_count(), 15);
    }

    #[test]
    fn guarded_pattern_skips_negated_claim() {
        let p = pattern(PatternConfig::guarded(r"\b(we\s+guarantee|guaranteed\s+to)\b"));
        assert_eq!(p.find("We guarantee results.", &guard()), Some("We guarantee"));
        assert_eq!(p.find("This is not guaranteed to work.", &guard()), None);
    }

    #[test]
    fn later_unguarded_match_is_found() {
        let p = pattern(PatternConfig::guarded(r"\bguaranteed\s+to\b"));
        let line = "not guaranteed to pass on every platform, but it is guaranteed to run";
        assert_eq!(p.find(line, &guard()), Some("guaranteed to"));
    }

    #[test]
    fn trailing_exclusion_applies() {
        let p = pattern(
            PatternConfig::guarded(r"\b(will\s+always|will\s+never)\b").not_followed_by(r"\s+fails"),
        );
        assert_eq!(p.find("It will never fails", &guard()), None);
        assert_eq!(p.find("It WILL ALWAYS work", &guard()), Some("WILL ALWAYS"));
    }

    #[test]
    fn invalid_regex_reports_category() {
        let err = CompiledPattern::compile("hype", &PatternConfig::plain("(unclosed")).unwrap_err();
        match err {
            PatternError::InvalidRegex { category, .. } => assert_eq!(category, "hype"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn empty_category_rejected() {
        let categories = vec![CategoryConfig {
            name: "empty".to_string(),
            patterns: vec![],
        }];
        assert!(PatternSet::compile(&categories).is_err());
    }
}
