//! Character and string predicates.
//!
//! The block ranges follow the Unicode block definitions. [`is_cjk`] and
//! [`is_cjk_ideograph`] are not equivalent: the first mixes ideographs with
//! punctuation blocks, the second covers ideographs only but includes the
//! supplementary-plane extensions.

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// `^[a-zA-Z]*` searched without an end anchor.
static ASCII_ALPHA_PREFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z]*").expect("valid regex"));

/// Returns `true` if `text` is empty or made only of space, tab, CR or LF.
///
/// Other Unicode whitespace (e.g. U+3000) does not count as blank.
pub fn is_blank(text: &str) -> bool {
    text.chars().all(|c| matches!(c, ' ' | '\t' | '\r' | '\n'))
}

/// CJK ideographs plus the punctuation and width-form blocks used alongside them.
pub const fn is_cjk(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF     // CJK Unified Ideographs
            | 0xF900..=0xFAFF // CJK Compatibility Ideographs
            | 0x3400..=0x4DBF // Extension A
            | 0x2000..=0x206F // General Punctuation
            | 0x3000..=0x303F // CJK Symbols and Punctuation
            | 0xFF00..=0xFFEF // Halfwidth and Fullwidth Forms
    )
}

/// CJK ideographs only, including extensions B through D and the
/// compatibility supplement.
pub const fn is_cjk_ideograph(c: char) -> bool {
    matches!(
        c as u32,
        0x4E00..=0x9FFF
            | 0x3400..=0x4DBF
            | 0x20000..=0x2A6DF // Extension B
            | 0x2A700..=0x2B73F // Extension C
            | 0x2B740..=0x2B81F // Extension D
            | 0xF900..=0xFAFF
            | 0x2F800..=0x2FA1F // Compatibility Ideographs Supplement
    )
}

/// Punctuation blocks used in CJK text, including vertical and compatibility forms.
pub const fn is_cjk_punctuation(c: char) -> bool {
    matches!(
        c as u32,
        0x2000..=0x206F
            | 0x3000..=0x303F
            | 0xFF00..=0xFFEF
            | 0xFE30..=0xFE4F // CJK Compatibility Forms
            | 0xFE10..=0xFE1F // Vertical Forms
    )
}

/// Returns `true` if any character of `text` satisfies [`is_cjk`].
pub fn contains_cjk(text: &str) -> bool {
    text.chars().any(is_cjk)
}

/// Returns `true` if every character is an ASCII letter.
///
/// The empty string qualifies.
pub fn is_ascii_alpha(text: &str) -> bool {
    text.chars().all(|c| c.is_ascii_alphabetic())
}

/// Searches for `^[a-zA-Z]*` without anchoring the end.
///
/// A zero-length match at the start always succeeds, so this returns `true`
/// for every input. Use [`is_ascii_alpha`] to test the whole string.
pub fn matches_ascii_alpha_prefix(text: &str) -> bool {
    ASCII_ALPHA_PREFIX.is_match(text)
}

/// Returns `false` for blank text, otherwise whether `text` starts with
/// `prefix` and ends with `suffix`.
pub fn starts_and_ends_with(text: &str, prefix: &str, suffix: &str) -> bool {
    !is_blank(text) && text.starts_with(prefix) && text.ends_with(suffix)
}

/// Returns `""` when `text` is blank, otherwise `text` itself.
pub fn default_if_blank(text: &str) -> &str {
    if is_blank(text) { "" } else { text }
}

/// Summary of every predicate applied to one piece of text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassifyReport {
    /// Number of characters (Unicode scalar values).
    pub chars: usize,
    /// Whether the text is blank.
    pub blank: bool,
    /// Whether the text consists only of ASCII letters.
    pub ascii_alpha: bool,
    /// Result of the unanchored-end prefix search (always `true`).
    pub ascii_alpha_prefix: bool,
    /// Whether any character is CJK.
    pub contains_cjk: bool,
    /// Characters matching [`is_cjk`].
    pub cjk_chars: usize,
    /// Characters matching [`is_cjk_ideograph`].
    pub ideographs: usize,
    /// Characters matching [`is_cjk_punctuation`].
    pub cjk_punctuation: usize,
}

/// Run all predicates over `text`.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn classify(text: &str) -> ClassifyReport {
    let mut report = ClassifyReport {
        chars: 0,
        blank: is_blank(text),
        ascii_alpha: is_ascii_alpha(text),
        ascii_alpha_prefix: matches_ascii_alpha_prefix(text),
        contains_cjk: false,
        cjk_chars: 0,
        ideographs: 0,
        cjk_punctuation: 0,
    };

    for c in text.chars() {
        report.chars += 1;
        if is_cjk(c) {
            report.cjk_chars += 1;
        }
        if is_cjk_ideograph(c) {
            report.ideographs += 1;
        }
        if is_cjk_punctuation(c) {
            report.cjk_punctuation += 1;
        }
    }
    report.contains_cjk = report.cjk_chars > 0;

    report
}
