//! transliterate.rs - The phonetic transliteration seam.
//!
//! Dictionary words written in CJK script can also be registered under a
//! phonetic romanization so that text like `shabi` is caught alongside the
//! ideographs. The index does not care how the romanization is produced;
//! anything implementing [`Transliterator`] can supply it.
//!
//! With the `pinyin` feature enabled, [`PinyinTransliterator`] provides a
//! toneless Hanyu Pinyin implementation.

use log::debug;

use crate::match_result::loggable;
use crate::normalizer::is_cjk_ideograph;

/// Converts a dictionary word into an alternate spelling to index.
pub trait Transliterator: Send + Sync {
    /// Returns the transliterated form, or `None` when the word has none.
    fn transliterate(&self, word: &str) -> Option<String>;
}

/// Adapts a plain function or closure into a [`Transliterator`].
pub struct FnTransliterator<F>(pub F);

impl<F> Transliterator for FnTransliterator<F>
where
    F: Fn(&str) -> Option<String> + Send + Sync,
{
    fn transliterate(&self, word: &str) -> Option<String> {
        (self.0)(word)
    }
}

/// True when `text` contains at least one CJK ideograph.
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk_ideograph)
}

/// Collects the transliterations of every CJK-bearing word in `words`.
///
/// Words without ideographs are skipped, as are words the transliterator
/// declines or maps to an empty string.
pub fn expand_with_transliterations<I, S>(words: I, transliterator: &dyn Transliterator) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = Vec::new();
    for word in words {
        let word = word.as_ref();
        if !contains_cjk(word) {
            continue;
        }
        match transliterator.transliterate(word) {
            Some(t) if !t.trim().is_empty() => {
                debug!("Transliterated {} -> {}", loggable(word), loggable(&t));
                out.push(t);
            }
            _ => debug!("No transliteration produced for {}.", loggable(word)),
        }
    }
    out
}

/// Toneless Hanyu Pinyin, one syllable per ideograph, concatenated.
///
/// Characters without a reading are carried through unchanged.
#[cfg(feature = "pinyin")]
#[derive(Debug, Default, Clone, Copy)]
pub struct PinyinTransliterator;

#[cfg(feature = "pinyin")]
impl Transliterator for PinyinTransliterator {
    fn transliterate(&self, word: &str) -> Option<String> {
        use pinyin::ToPinyin;

        let mut out = String::with_capacity(word.len() * 3);
        for (c, reading) in word.chars().zip(word.to_pinyin()) {
            match reading {
                Some(p) => out.push_str(p.plain()),
                None => out.push(c),
            }
        }
        Some(out)
    }
}
