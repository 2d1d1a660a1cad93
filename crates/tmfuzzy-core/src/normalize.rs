//! Punctuation, symbol and digit stripping

use crate::Language;

/// ASCII marks stripped from Japanese input
const JA_ASCII_MARKS: &str = "`~!@#$%^&*()_-+=][}{';\":/?.><,";

/// Normalize one input according to the selected ruleset.
///
/// English lower-cases first, then keeps ASCII letters, underscore and
/// whitespace. Non-ASCII letters do not survive English normalization.
///
/// Japanese strips the CJK symbols and punctuation block, the full-width
/// forms block (which also covers half-width katakana), a fixed set of ASCII
/// marks and ASCII digits. Everything else passes through untouched.
pub fn normalize(text: &str, language: Language) -> String {
    match language {
        Language::English => text
            .to_lowercase()
            .chars()
            .filter(|&c| keep_english(c))
            .collect(),
        Language::Japanese => text.chars().filter(|&c| keep_japanese(c)).collect(),
    }
}

#[inline]
fn keep_english(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || is_space(c)
}

/// Whitespace as ECMAScript `\s` defines it: Unicode White_Space without
/// NEL (U+0085), plus the BOM (U+FEFF)
#[inline]
pub(crate) fn is_space(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[inline]
fn keep_japanese(c: char) -> bool {
    !matches!(c, '\u{3000}'..='\u{303f}' | '\u{ff00}'..='\u{ff9f}' | '0'..='9')
        && !JA_ASCII_MARKS.contains(c)
}
