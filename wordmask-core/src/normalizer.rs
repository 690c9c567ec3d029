//! normalizer.rs - Text normalization applied before matching.
//!
//! Both dictionary words and query text go through [`normalize`], so a
//! word that was inserted through the normalizing path always meets query
//! text in the same form. The transform runs per character and keeps
//! order:
//!
//! 1. Fullwidth ASCII forms (`ｓ`, `Ｂ`, `１`) fold to their ASCII twins.
//! 2. Alphabetic characters fold to lower case.
//! 3. Whitespace is dropped.
//! 4. Anything that is not a CJK unified ideograph, an ASCII letter or an
//!    ASCII digit is dropped.
//!
//! License: MIT OR APACHE 2.0

/// First and last code point of the CJK unified ideograph block matched.
pub const CJK_START: char = '\u{4e00}';
pub const CJK_END: char = '\u{9fa5}';

const FULLWIDTH_START: u32 = 0xFF01;
const FULLWIDTH_END: u32 = 0xFF5E;
const FULLWIDTH_OFFSET: u32 = 0xFEE0;

/// True for characters in the CJK unified ideograph range.
pub fn is_cjk_ideograph(c: char) -> bool {
    (CJK_START..=CJK_END).contains(&c)
}

/// True for characters that survive normalization.
pub fn is_kept(c: char) -> bool {
    is_cjk_ideograph(c) || c.is_ascii_alphanumeric()
}

fn fold_width(c: char) -> char {
    let code = c as u32;
    if (FULLWIDTH_START..=FULLWIDTH_END).contains(&code) {
        char::from_u32(code - FULLWIDTH_OFFSET).unwrap_or(c)
    } else {
        c
    }
}

/// Normalizes `text` into the only form the matcher ever scans.
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars().map(fold_width) {
        if c.is_whitespace() {
            continue;
        }
        for lower in c.to_lowercase() {
            if is_kept(lower) {
                out.push(lower);
            }
        }
    }
    out
}

/// Normalizes `text` straight into a character buffer for index-based walks.
pub fn normalize_chars(text: &str) -> Vec<char> {
    normalize(text).chars().collect()
}
