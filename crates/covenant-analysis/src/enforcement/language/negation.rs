//! Negation guard: rejects claims hedged by a preceding negation word.

use covenant_core::errors::PatternError;
use regex::Regex;

/// Punctuation ending the clause a negation can apply to.
const CLAUSE_BREAKS: &[char] = &['.', ';', ':', '!', '?'];

/// Tests the text just before a match for negation words.
#[derive(Debug, Clone)]
pub struct NegationGuard {
    words: Regex,
    window: usize,
}

impl NegationGuard {
    pub fn new(words: &[String], window: usize) -> Result<Self, PatternError> {
        let alternation = words
            .iter()
            .map(|w| regex::escape(w.trim()))
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join("|");
        if alternation.is_empty() {
            return Err(PatternError::EmptyCategory {
                name: "negation_words".to_string(),
            });
        }
        let pattern = format!(r"(?i)\b(?:{alternation})\b");
        let words = Regex::new(&pattern).map_err(|e| PatternError::InvalidRegex {
            category: "negation_words".to_string(),
            pattern,
            message: e.to_string(),
        })?;
        Ok(Self { words, window })
    }

    /// Whether the match starting at byte `start` of `line` is negated.
    ///
    /// Only the clause holding the match counts: a negation before the last
    /// sentence or clause break in the window does not hedge it.
    pub fn is_negated(&self, line: &str, start: usize) -> bool {
        let window = preceding_window(line, start, self.window);
        self.words.is_match(current_clause(window))
    }
}

/// The part of `window` after its last clause break.
fn current_clause(window: &str) -> &str {
    window
        .rfind(CLAUSE_BREAKS)
        .map_or(window, |i| &window[i + 1..])
}

/// Up to `width` characters of `line` ending at byte `end`.
///
/// When the cut falls inside a word, the partial word is dropped so that a
/// fragment like "ot" of "not" cannot be read as a different word.
pub fn preceding_window(line: &str, end: usize, width: usize) -> &str {
    let end = floor_char_boundary(line, end);
    let before = &line[..end];
    let total = before.chars().count();
    if total <= width {
        return before;
    }

    let cut = before
        .char_indices()
        .nth(total - width)
        .map_or(before.len(), |(i, _)| i);
    let window = &before[cut..];

    let cut_mid_word = before[..cut].chars().next_back().is_some_and(is_word_char)
        && window.chars().next().is_some_and(is_word_char);
    if cut_mid_word {
        window.trim_start_matches(is_word_char)
    } else {
        window
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    if index >= s.len() {
        return s.len();
    }
    while !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}
