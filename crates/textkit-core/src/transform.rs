//! Case, order and width transforms.
//!
//! Width conversion maps between ASCII and the Halfwidth and Fullwidth Forms
//! block: printable ASCII `!`..`~` sits exactly [`WIDTH_OFFSET`] below its
//! full-width twin, and the ASCII space pairs with the ideographic space.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Distance between printable ASCII and the full-width forms block.
pub const WIDTH_OFFSET: u32 = 0xFEE0;

const IDEOGRAPHIC_SPACE: char = '\u{3000}';

/// A named transform, for callers that pick the operation at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum Transform {
    /// [`reverse`]
    Reverse,
    /// [`upper_first`]
    UpperFirst,
    /// [`lower_first`]
    LowerFirst,
    /// [`to_full_width`]
    ToFullWidth,
    /// [`to_half_width`]
    ToHalfWidth,
}

impl Transform {
    /// Apply this transform to `text`.
    pub fn apply(self, text: &str) -> String {
        match self {
            Self::Reverse => reverse(text),
            Self::UpperFirst => upper_first(text),
            Self::LowerFirst => lower_first(text),
            Self::ToFullWidth => to_full_width(text),
            Self::ToHalfWidth => to_half_width(text),
        }
    }

    /// Returns the transform name as used on the command line.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Reverse => "reverse",
            Self::UpperFirst => "upper-first",
            Self::LowerFirst => "lower-first",
            Self::ToFullWidth => "to-full-width",
            Self::ToHalfWidth => "to-half-width",
        }
    }
}

impl std::fmt::Display for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reverse `text` by Unicode scalar value.
///
/// Combining sequences and multi-codepoint emoji are not kept together.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

/// Uppercase the first character if it is an ASCII lowercase letter.
pub fn upper_first(text: &str) -> String {
    map_first(text, |c| c.is_ascii_lowercase(), |c| c.to_ascii_uppercase())
}

/// Lowercase the first character if it is an ASCII uppercase letter.
pub fn lower_first(text: &str) -> String {
    map_first(text, |c| c.is_ascii_uppercase(), |c| c.to_ascii_lowercase())
}

fn map_first(text: &str, applies: impl Fn(char) -> bool, f: impl Fn(char) -> char) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) if applies(first) => {
            let mut out = String::with_capacity(text.len());
            out.push(f(first));
            out.push_str(chars.as_str());
            out
        }
        _ => text.to_string(),
    }
}

/// Convert full-width forms to half-width (DBC).
///
/// U+3000 becomes a space and U+FF01..=U+FF5E shift down to ASCII. Other
/// characters, including half-width katakana, are unchanged.
pub fn to_half_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            IDEOGRAPHIC_SPACE => ' ',
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(c as u32 - WIDTH_OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}

/// Convert printable ASCII to full-width forms (SBC).
///
/// A space becomes U+3000 and `!`..=`~` shift up into U+FF01..=U+FF5E.
pub fn to_full_width(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            ' ' => IDEOGRAPHIC_SPACE,
            '!'..='~' => char::from_u32(c as u32 + WIDTH_OFFSET).unwrap_or(c),
            _ => c,
        })
        .collect()
}
