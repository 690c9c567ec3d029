// wordmask-core/src/engine.rs
//! Defines the core SanitizationEngine trait.
//!
//! The trait is the seam between front ends (the CLI, headless helpers)
//! and whatever holds the dictionary: a plain [`crate::SensitiveIndex`]
//! owned by one thread, or a [`crate::SharedIndex`] that can keep growing
//! while other threads query it.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;

use crate::match_result::{summarize, MatchResult, MatchSummaryItem};
use crate::matcher::SensitiveIndex;

/// A trait that defines the core functionality of a sanitization engine.
pub trait SanitizationEngine: Send + Sync {
    /// Finds every dictionary word in `content` and produces the redacted copy.
    fn sanitize(&self, content: &str) -> Result<MatchResult>;

    /// Counts occurrences per matched word without exposing the redacted text.
    ///
    /// Used by the `scan` command.
    fn analyze_for_stats(&self, content: &str) -> Result<Vec<MatchSummaryItem>> {
        Ok(summarize(&self.sanitize(content)?))
    }

    /// The character written over matched spans.
    fn mask_char(&self) -> char;

    /// Number of distinct words the engine knows about.
    fn word_count(&self) -> usize;
}

impl SanitizationEngine for SensitiveIndex {
    fn sanitize(&self, content: &str) -> Result<MatchResult> {
        Ok(self.match_text(content))
    }

    fn mask_char(&self) -> char {
        SensitiveIndex::mask_char(self)
    }

    fn word_count(&self) -> usize {
        self.len()
    }
}
