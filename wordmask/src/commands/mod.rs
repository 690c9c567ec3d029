//! Command implementations and the dictionary/input plumbing they share.

pub mod sanitize;
pub mod scan;

use anyhow::{bail, Context, Result};
use log::{debug, warn};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

use wordmask_core::{merge_dictionaries, DictionaryConfig, SensitiveIndex, Transliterator};

use crate::cli::DictionaryArgs;

/// Resolves the dictionary flags into a merged, validated configuration.
pub fn resolve_dictionary(args: &DictionaryArgs) -> Result<DictionaryConfig> {
    let user_config = args
        .dictionary
        .as_ref()
        .map(DictionaryConfig::load_from_file)
        .transpose()
        .context("Failed to load user dictionary")?;

    let mut config = if args.no_defaults {
        match user_config {
            Some(cfg) => cfg,
            None => bail!("--no-defaults requires --dictionary"),
        }
    } else {
        merge_dictionaries(DictionaryConfig::load_default()?, user_config)
    };

    if let Some(mask) = &args.mask {
        config.mask = mask.clone();
    }
    if args.pinyin {
        config.transliterate = true;
    }

    config.validate()?;
    debug!("Resolved dictionary with {} words.", config.words.len());
    Ok(config)
}

#[cfg(feature = "pinyin")]
fn transliterator() -> Option<Box<dyn Transliterator>> {
    Some(Box::new(wordmask_core::PinyinTransliterator))
}

#[cfg(not(feature = "pinyin"))]
fn transliterator() -> Option<Box<dyn Transliterator>> {
    None
}

/// Builds the index the commands scan against.
pub fn build_index(args: &DictionaryArgs) -> Result<SensitiveIndex> {
    let config = resolve_dictionary(args)?;
    let translit = transliterator();
    if config.transliterate && translit.is_none() {
        warn!("Pinyin transliteration requested but this build lacks the `pinyin` feature.");
    }
    config.build_index(translit.as_deref())
}

/// Reads the whole input from `path`, or from stdin when `path` is `None`.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(p) => fs::read_to_string(p)
            .with_context(|| format!("Failed to read input file: {}", p.display())),
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
