//! Core types for rule violations.

use serde::{Deserialize, Serialize};

/// One prohibited-language hit. Records keep detection order and are never
/// deduplicated: two patterns matching one line yield two records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationRecord {
    /// Target document, relative to the root as configured.
    pub file: String,
    pub category: String,
    /// Exact matched substring, original case.
    #[serde(rename = "match")]
    pub matched: String,
    /// 1-based line number.
    pub line: usize,
    /// Leading characters of the trimmed line.
    pub context: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_ledger_field_names() {
        let record = ViolationRecord {
            file: "impl/README.md".to_string(),
            category: "hype".to_string(),
            matched: "revolutionary AI".to_string(),
            line: 3,
            context: "A revolutionary AI".to_string(),
        };
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["match"], "revolutionary AI");
        assert_eq!(value["line"], 3);
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys.len(), 5);
    }
}
