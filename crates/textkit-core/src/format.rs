//! Human-readable formatting helpers.
//!
//! # Differences from legacy output
//!
//! Older clients ordered numeric keys with a sorted map keyed by the parsed
//! integer, so numerically equal keys such as `"7"` and `"07"` collapsed into
//! a single entry and one value was silently dropped. [`sort_by_numeric_key`]
//! keeps every entry instead, which means its output can be longer than the
//! legacy result for such inputs.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::{FormatError, FormatResult};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;

/// Returned by [`format_byte_size`] for sizes of 1 TiB and above.
pub const SIZE_ERROR: &str = "size: error";

/// Positions before which [`format_phone_number`] inserts a space.
const PHONE_BREAKS: [usize; 2] = [3, 7];
const PHONE_LEN: usize = 11;

/// Format a byte count with two decimals in the largest unit up to GB.
///
/// `0` → `"0bytes"`, `1024` → `"1.00KB"`, `1536` → `"1.50KB"`.
/// Sizes from 1024⁴ upward return [`SIZE_ERROR`] rather than a TB value.
pub fn format_byte_size(bytes: u64) -> String {
    #[allow(clippy::cast_precision_loss)]
    let scaled = |unit: u64| bytes as f64 / unit as f64;
    match bytes {
        b if b < KIB => format!("{b}bytes"),
        b if b < MIB => format!("{:.2}KB", scaled(KIB)),
        b if b < GIB => format!("{:.2}MB", scaled(MIB)),
        b if b < TIB => format!("{:.2}GB", scaled(GIB)),
        _ => SIZE_ERROR.to_string(),
    }
}

/// Group an 11-character phone number as `3 4 4`.
///
/// # Errors
///
/// [`FormatError::PhoneLength`] if the input is not exactly 11 characters.
pub fn try_format_phone_number(digits: &str) -> FormatResult<String> {
    let len = digits.chars().count();
    if len != PHONE_LEN {
        return Err(FormatError::PhoneLength { len });
    }

    let mut out = String::with_capacity(digits.len() + PHONE_BREAKS.len());
    for (i, c) in digits.chars().enumerate() {
        if PHONE_BREAKS.contains(&i) {
            out.push(' ');
        }
        out.push(c);
    }
    Ok(out)
}

/// Like [`try_format_phone_number`], but any other length yields `""`.
///
/// An empty result is the only signal of bad input.
pub fn format_phone_number(digits: &str) -> String {
    try_format_phone_number(digits).unwrap_or_default()
}

/// One entry of a map ordered by [`sort_by_numeric_key`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct SortedEntry<V> {
    /// The original key text.
    pub key: String,
    /// The value stored under the key.
    pub value: V,
}

/// Order map entries by the integer value of their keys, ascending.
///
/// Returns `Ok(None)` for an empty map. Keys that compare equal numerically
/// (`"7"` and `"07"`) are both kept, ordered by their text.
///
/// # Errors
///
/// [`FormatError::NonNumericKey`] for the first key that does not parse as
/// an `i32`. Entries are never skipped or defaulted.
#[tracing::instrument(skip_all)]
pub fn sort_by_numeric_key<I, V>(map: I) -> FormatResult<Option<Vec<SortedEntry<V>>>>
where
    I: IntoIterator<Item = (String, V)>,
{
    let mut keyed = map
        .into_iter()
        .map(|(key, value)| match key.parse::<i32>() {
            Ok(n) => Ok((n, SortedEntry { key, value })),
            Err(_) => Err(FormatError::NonNumericKey { key }),
        })
        .collect::<FormatResult<Vec<_>>>()?;

    if keyed.is_empty() {
        return Ok(None);
    }

    keyed.sort_by(|(a, ea), (b, eb)| a.cmp(b).then_with(|| ea.key.cmp(&eb.key)));
    tracing::debug!(entries = keyed.len(), "sorted by numeric key");
    Ok(Some(keyed.into_iter().map(|(_, entry)| entry).collect()))
}
