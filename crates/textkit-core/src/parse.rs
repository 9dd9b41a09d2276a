//! Lenient parsing: every function returns a fallback instead of an error.
//!
//! Use `str::parse` directly where a malformed value must be reported.

/// Parse a base-10 `i32`, returning `default` on any failure.
///
/// A leading `+` or `-` is accepted; surrounding whitespace is not.
pub fn to_int(text: &str, default: i32) -> i32 {
    text.parse().unwrap_or(default)
}

/// [`to_int`] with a default of `0`.
pub fn to_int_or_zero(text: &str) -> i32 {
    to_int(text, 0)
}

/// Parse a base-10 `i64`, returning `0` on any failure.
pub fn to_long(text: &str) -> i64 {
    text.parse().unwrap_or(0)
}

/// `true` iff `text` is `"true"` in any ASCII case.
pub fn to_bool(text: &str) -> bool {
    text.eq_ignore_ascii_case("true")
}
