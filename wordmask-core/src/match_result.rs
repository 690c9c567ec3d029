//! Data structures describing what a scan found, plus the logging helpers
//! that keep matched words out of debug output unless explicitly allowed.

use indexmap::IndexMap;
use log::debug;
use once_cell::sync::Lazy;
use serde::Serialize;

/// Initialized once: whether matched words may appear verbatim in debug logs.
static PII_DEBUG_ALLOWED: Lazy<bool> = Lazy::new(|| {
    std::env::var("WORDMASK_ALLOW_DEBUG_PII")
        .map(|s| s.eq_ignore_ascii_case("true"))
        .unwrap_or(false)
});

/// A single occurrence of a dictionary word.
///
/// `start` and `end` are character offsets into the normalized text,
/// `end` exclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordMatch {
    pub word: String,
    pub start: usize,
    pub end: usize,
}

/// The outcome of matching one piece of text against the index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct MatchResult {
    /// Distinct matched words in the order they were first discovered.
    pub matched_words: Vec<String>,
    /// The normalized text with every matched span masked, or the original
    /// input untouched when nothing matched.
    pub redacted_text: String,
    /// Every occurrence, ordered by starting offset then by length.
    pub matches: Vec<WordMatch>,
    /// True when `redacted_text` is derived from the normalized text.
    pub normalized: bool,
}

impl MatchResult {
    /// A result carrying the input through unchanged.
    pub fn passthrough(text: &str) -> Self {
        Self {
            matched_words: Vec::new(),
            redacted_text: text.to_string(),
            matches: Vec::new(),
            normalized: false,
        }
    }

    pub fn has_matches(&self) -> bool {
        !self.matched_words.is_empty()
    }
}

/// Per-word occurrence counts for reporting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSummaryItem {
    pub word: String,
    pub occurrences: usize,
}

/// Folds a result's occurrences into one entry per distinct word,
/// keeping first-discovery order.
pub fn summarize(result: &MatchResult) -> Vec<MatchSummaryItem> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for word in &result.matched_words {
        counts.insert(word.as_str(), 0);
    }
    for m in &result.matches {
        *counts.entry(m.word.as_str()).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .map(|(word, occurrences)| MatchSummaryItem {
            word: word.to_string(),
            occurrences,
        })
        .collect()
}

pub fn redact_sensitive(s: &str) -> String {
    const MAX_LEN: usize = 8;
    let chars = s.chars().count();
    if chars <= MAX_LEN {
        "[REDACTED]".to_string()
    } else {
        format!("[REDACTED: {} chars]", chars)
    }
}

/// Renders a dictionary word for the log, honoring `WORDMASK_ALLOW_DEBUG_PII`.
pub fn loggable(sensitive_content: &str) -> String {
    if *PII_DEBUG_ALLOWED {
        format!("'{}'", sensitive_content)
    } else {
        redact_sensitive(sensitive_content)
    }
}

pub fn log_word_match_debug(module_path: &str, m: &WordMatch, first_seen: bool) {
    debug!(
        "{} Found word match: Word={}, Span={}..{}, FirstSeen={}",
        module_path,
        loggable(&m.word),
        m.start,
        m.end,
        first_seen
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_redact_sensitive_short_string() {
        assert_eq!(redact_sensitive("垃圾"), "[REDACTED]".to_string());
    }

    #[test]
    fn test_redact_sensitive_counts_chars_not_bytes() {
        assert_eq!(redact_sensitive("一二三四五六七八九"), "[REDACTED: 9 chars]".to_string());
    }

    #[test]
    fn test_summarize_keeps_discovery_order() {
        let result = MatchResult {
            matched_words: vec!["sb".to_string(), "垃圾".to_string()],
            redacted_text: "**x**x**".to_string(),
            matches: vec![
                WordMatch { word: "sb".to_string(), start: 0, end: 2 },
                WordMatch { word: "垃圾".to_string(), start: 3, end: 5 },
                WordMatch { word: "sb".to_string(), start: 6, end: 8 },
            ],
            normalized: true,
        };
        let summary = summarize(&result);
        assert_eq!(
            summary,
            vec![
                MatchSummaryItem { word: "sb".to_string(), occurrences: 2 },
                MatchSummaryItem { word: "垃圾".to_string(), occurrences: 1 },
            ]
        );
    }

    #[test]
    fn test_result_serializes_to_json() {
        let result = MatchResult {
            matched_words: vec!["sb".to_string()],
            redacted_text: "a**".to_string(),
            matches: vec![WordMatch { word: "sb".to_string(), start: 1, end: 3 }],
            normalized: true,
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["matched_words"][0], "sb");
        assert_eq!(json["redacted_text"], "a**");
        assert_eq!(json["matches"][0]["start"], 1);
        assert_eq!(json["matches"][0]["end"], 3);
        assert_eq!(json["normalized"], true);
    }

    #[test]
    fn test_passthrough_has_no_matches() {
        let result = MatchResult::passthrough("Hello, World");
        assert!(!result.has_matches());
        assert_eq!(result.redacted_text, "Hello, World");
        assert!(!result.normalized);
    }
}
