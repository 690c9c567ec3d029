// File: wordmask-core/src/headless.rs

//! `headless.rs`
//! Convenience wrappers for one-shot, non-interactive use: build an index
//! from a dictionary configuration and run a single piece of text through it.

use anyhow::Result;
use crate::config::DictionaryConfig;
use crate::engine::SanitizationEngine;
use crate::match_result::MatchSummaryItem;

/// Redacts `content` against `config`, returning only the redacted text.
///
/// Transliteration is not applied here; build the index yourself with
/// [`DictionaryConfig::build_index`] to supply a transliterator.
pub fn headless_sanitize_string(config: &DictionaryConfig, content: &str) -> Result<String> {
    let index = config.build_index(None)?;
    Ok(index.sanitize(content)?.redacted_text)
}

/// Scans `content` against `config`, returning per-word occurrence counts.
pub fn headless_scan(config: &DictionaryConfig, content: &str) -> Result<Vec<MatchSummaryItem>> {
    let index = config.build_index(None)?;
    index.analyze_for_stats(content)
}
