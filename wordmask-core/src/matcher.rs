//! matcher.rs - The sensitive-word index and its multi-pattern matcher.
//!
//! `SensitiveIndex` pairs a [`Trie`] with the mask character used for
//! redaction. It is built once (or incrementally) and queried many times.
//! The index holds no lock of its own: concurrent `match_text` calls on a
//! shared reference are fine, but insertion needs `&mut self`, so any
//! caller mixing writers and readers across threads must serialize them,
//! for example through [`crate::shared::SharedIndex`].
//!
//! License: MIT OR APACHE 2.0

use std::collections::HashSet;
use log::{debug, warn};

use crate::errors::WordmaskError;
use crate::match_result::{log_word_match_debug, loggable, MatchResult, WordMatch};
use crate::normalizer::{normalize, normalize_chars};
use crate::trie::{NodeId, Trie};

/// The mask character used when none is configured.
pub const DEFAULT_MASK: char = '*';

/// A dictionary of forbidden words plus the character that masks them.
#[derive(Debug, Clone)]
pub struct SensitiveIndex {
    trie: Trie,
    mask: char,
}

impl Default for SensitiveIndex {
    fn default() -> Self {
        Self::new()
    }
}

impl SensitiveIndex {
    /// Creates an empty index masking with `*`.
    pub fn new() -> Self {
        Self::with_mask(DEFAULT_MASK)
    }

    pub fn with_mask(mask: char) -> Self {
        Self {
            trie: Trie::new(),
            mask,
        }
    }

    /// Creates an empty index from a textual mask value.
    ///
    /// The value must hold exactly one character.
    pub fn from_mask_str(mask: &str) -> Result<Self, WordmaskError> {
        Ok(Self::with_mask(parse_mask(mask)?))
    }

    pub fn mask_char(&self) -> char {
        self.mask
    }

    /// Registers `word` verbatim.
    ///
    /// The trie is keyed by the word's characters exactly as given. Callers
    /// are expected to pass words already in normalized form; use
    /// [`SensitiveIndex::insert_normalized`] to have that done here.
    pub fn insert(&mut self, word: &str) {
        self.trie.insert(word);
    }

    pub fn insert_all<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.trie.insert_all(words);
    }

    /// Normalizes `word` the way query text is normalized, then inserts it.
    ///
    /// Returns `false` when nothing survives normalization.
    pub fn insert_normalized(&mut self, word: &str) -> bool {
        let normalized = normalize(word);
        if normalized.is_empty() {
            warn!("Dictionary entry {} normalizes to nothing; skipped.", loggable(word));
            return false;
        }
        self.trie.insert(&normalized);
        true
    }

    pub fn insert_all_normalized<I, S>(&mut self, words: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        words
            .into_iter()
            .filter(|w| self.insert_normalized(w.as_ref()))
            .count()
    }

    /// Single-step child lookup.
    pub fn child_at(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.trie.child_at(node, c)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.trie.contains(word)
    }

    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Scans `text` for every registered word.
    ///
    /// Each starting offset of the normalized text begins an independent
    /// downward walk, and every terminal node met along that walk counts as
    /// a match, so a word contained in a longer one is reported too.
    /// Matches from different offsets may overlap.
    ///
    /// When nothing matches, the original `text` comes back untouched.
    /// Otherwise the redacted text is the normalized text with every
    /// matched character replaced by the mask.
    pub fn match_text(&self, text: &str) -> MatchResult {
        if self.trie.is_empty() || text.is_empty() {
            return MatchResult::passthrough(text);
        }

        let chars = normalize_chars(text);
        let matches = self.find_spans(&chars);
        if matches.is_empty() {
            return MatchResult::passthrough(text);
        }

        let mut matched_words = Vec::new();
        let mut redacted = chars.clone();
        {
            let mut seen: HashSet<&str> = HashSet::new();
            for m in &matches {
                let first_seen = seen.insert(m.word.as_str());
                if first_seen {
                    matched_words.push(m.word.clone());
                }
                log_word_match_debug(module_path!(), m, first_seen);
                redacted[m.start..m.end].fill(self.mask);
            }
        }

        debug!(
            "Matched {} distinct word(s) across {} occurrence(s) in {} normalized chars.",
            matched_words.len(),
            matches.len(),
            chars.len()
        );

        MatchResult {
            matched_words,
            redacted_text: redacted.into_iter().collect(),
            matches,
            normalized: true,
        }
    }

    /// Returns just the distinct matched words of `text`.
    pub fn find_words(&self, text: &str) -> Vec<String> {
        self.match_text(text).matched_words
    }

    /// Walks the trie from every offset of `chars`, collecting each terminal
    /// node reached as a span `[start, end)`.
    fn find_spans(&self, chars: &[char]) -> Vec<WordMatch> {
        let mut spans = Vec::new();
        let len = chars.len();

        for start in 0..len {
            let Some(mut node) = self.trie.child_at(NodeId::ROOT, chars[start]) else {
                continue;
            };
            let mut end = start + 1;
            loop {
                if let Some(word) = self.trie.word_at(node) {
                    spans.push(WordMatch {
                        word: word.to_string(),
                        start,
                        end,
                    });
                }
                // The terminal check above already ran for a walk that
                // consumed the final character.
                if end == len {
                    break;
                }
                match self.trie.child_at(node, chars[end]) {
                    Some(next) => {
                        node = next;
                        end += 1;
                    }
                    None => break,
                }
            }
        }
        spans
    }
}

/// Parses a textual mask value into a single character.
pub fn parse_mask(mask: &str) -> Result<char, WordmaskError> {
    let mut chars = mask.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(WordmaskError::InvalidMask(mask.to_string())),
    }
}
