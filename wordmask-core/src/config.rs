//! Configuration management for `wordmask-core`.
//!
//! A dictionary configuration lists the forbidden words, the mask character
//! used for redaction, and whether CJK entries should also be registered
//! under their transliteration. Configurations are read from YAML, can be
//! merged over the embedded defaults, and are turned into a ready-to-query
//! [`SensitiveIndex`] by [`DictionaryConfig::build_index`].
//!
//! License: MIT OR Apache-2.0

use anyhow::{anyhow, Context, Result};
use indexmap::IndexSet;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::matcher::{parse_mask, SensitiveIndex, DEFAULT_MASK};
use crate::normalizer::normalize;
use crate::transliterate::{expand_with_transliterations, Transliterator};

/// The top-level dictionary configuration.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct DictionaryConfig {
    /// The single character written over matched spans.
    pub mask: String,
    /// Forbidden words, in any casing or spacing; they are normalized on build.
    pub words: Vec<String>,
    /// If true, CJK words are also indexed under their transliteration.
    pub transliterate: bool,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            mask: DEFAULT_MASK.to_string(),
            words: Vec::new(),
            transliterate: false,
        }
    }
}

impl DictionaryConfig {
    /// Loads a dictionary from a YAML file.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading dictionary from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read dictionary file {}", path.display()))?;
        let config: DictionaryConfig = serde_yml::from_str(&text)
            .with_context(|| format!("Failed to parse dictionary file {}", path.display()))?;

        config.validate()?;
        info!("Loaded {} words from file {}.", config.words.len(), path.display());

        Ok(config)
    }

    /// Loads the embedded default dictionary.
    pub fn load_default() -> Result<Self> {
        debug!("Loading default dictionary from embedded string...");
        let default_yaml = include_str!("../config/default_dictionary.yaml");
        let config: DictionaryConfig = serde_yml::from_str(default_yaml)
            .context("Failed to parse default dictionary")?;

        debug!("Loaded {} default words.", config.words.len());
        Ok(config)
    }

    /// Checks the mask and the word list, reporting every problem at once.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        if parse_mask(&self.mask).is_err() {
            errors.push(format!(
                "The `mask` field must be exactly one character, got '{}'.",
                self.mask
            ));
        }

        for (i, word) in self.words.iter().enumerate() {
            if word.trim().is_empty() {
                errors.push(format!("Word #{} is empty.", i + 1));
            }
        }

        if !errors.is_empty() {
            let full_error_message = format!("Dictionary validation failed:\n{}", errors.join("\n"));
            Err(anyhow!(full_error_message))
        } else {
            Ok(())
        }
    }

    /// Builds an index from this configuration.
    ///
    /// Every word goes through [`normalize`] before insertion, the same
    /// transform applied to query text. When `transliterate` is set and a
    /// transliterator is given, the normalized transliterations of CJK words
    /// are inserted as well.
    pub fn build_index(&self, transliterator: Option<&dyn Transliterator>) -> Result<SensitiveIndex> {
        let mut index = SensitiveIndex::from_mask_str(&self.mask)
            .context("Failed to construct sensitive-word index")?;

        let inserted = index.insert_all_normalized(&self.words);
        debug!("Inserted {} of {} dictionary words.", inserted, self.words.len());

        if self.transliterate {
            match transliterator {
                Some(t) => {
                    let extra = expand_with_transliterations(&self.words, t);
                    let added = index.insert_all_normalized(&extra);
                    debug!("Inserted {} transliterated words.", added);
                }
                None => warn!("`transliterate` is enabled but no transliterator is available; skipping."),
            }
        }

        info!("Index ready with {} distinct words.", index.len());
        Ok(index)
    }
}

/// Merges a user dictionary over the defaults.
///
/// Words are unioned in order, defaults first, dropping entries whose
/// normalized forms collide. The user's mask and transliteration flag win.
pub fn merge_dictionaries(
    default_config: DictionaryConfig,
    user_config: Option<DictionaryConfig>,
) -> DictionaryConfig {
    debug!("merge_dictionaries called. Initial default words count: {}", default_config.words.len());

    let Some(user_cfg) = user_config else {
        return default_config;
    };

    let mut seen: IndexSet<String> = IndexSet::new();
    let mut words = Vec::with_capacity(default_config.words.len() + user_cfg.words.len());
    for word in default_config.words.into_iter().chain(user_cfg.words) {
        if seen.insert(normalize(&word)) {
            words.push(word);
        } else {
            warn!("Duplicate dictionary word dropped during merge.");
        }
    }

    debug!("Final total words after merge: {}", words.len());

    DictionaryConfig {
        mask: user_cfg.mask,
        words,
        transliterate: user_cfg.transliterate,
    }
}
