// wordmask-core/src/lib.rs
//! # wordmask Core Library
//!
//! `wordmask-core` detects and redacts words from a dictionary of forbidden
//! terms. Words are indexed in a character-keyed prefix tree; query text is
//! normalized (lowercased, stripped of whitespace and punctuation) and then
//! walked against the tree from every starting offset, so spaced-out or
//! punctuated spellings such as `s b` or `S.B` are still caught.
//!
//! ## Modules
//!
//! * `trie`: The arena-backed prefix tree.
//! * `normalizer`: The text transform applied before matching.
//! * `matcher`: `SensitiveIndex`, which owns a trie and a mask character and runs the scan.
//! * `match_result`: Result types and PII-aware logging helpers.
//! * `config`: YAML dictionary configuration, merging, and index construction.
//! * `transliterate`: The seam for registering phonetic spellings of CJK words.
//! * `engine`: The `SanitizationEngine` trait.
//! * `shared`: `SharedIndex`, a read-write-locked handle for indexes that grow while in use.
//! * `headless`: One-shot helpers.
//! * `errors`: The library error type.
//!
//! ## Usage Example
//!
//! ```rust
//! use wordmask_core::SensitiveIndex;
//!
//! let mut index = SensitiveIndex::new();
//! index.insert_all(["垃圾", "sb"]);
//!
//! let result = index.match_text("什么垃 圾打野，SB");
//! assert_eq!(result.matched_words, vec!["垃圾", "sb"]);
//! assert_eq!(result.redacted_text, "什么**打野**");
//! ```
//!
//! ## Concurrency
//!
//! `SensitiveIndex` has no internal locking. Shared references can be
//! queried from many threads at once, and Rust's borrow rules keep
//! insertion exclusive. When insertion and matching must interleave across
//! threads, wrap the index in a [`SharedIndex`].
//!
//! ---
//! License: MIT OR Apache-2.0

pub mod config;
pub mod engine;
pub mod errors;
pub mod headless;
pub mod match_result;
pub mod matcher;
pub mod normalizer;
pub mod shared;
pub mod transliterate;
pub mod trie;

/// Re-exports the dictionary configuration types and functions.
pub use config::{merge_dictionaries, DictionaryConfig};

pub use errors::WordmaskError;

pub use engine::SanitizationEngine;

/// Re-exports the index, the default mask and mask parsing.
pub use matcher::{parse_mask, SensitiveIndex, DEFAULT_MASK};

pub use match_result::{summarize, MatchResult, MatchSummaryItem, WordMatch};

pub use normalizer::normalize;

pub use shared::SharedIndex;

pub use transliterate::{contains_cjk, expand_with_transliterations, FnTransliterator, Transliterator};

#[cfg(feature = "pinyin")]
pub use transliterate::PinyinTransliterator;

pub use trie::{NodeId, Trie, TrieNode};

/// Re-exports types and functions for one-shot, non-interactive use.
pub use headless::{headless_sanitize_string, headless_scan};
