//! Hashing, symmetric encryption and URL percent-encoding.
//!
//! # Compatibility notes
//!
//! These routines exist to interoperate with data produced by older clients:
//!
//! - [`hash_hex`] is MD5. It is not collision resistant; new call sites
//!   should pick a modern hash.
//! - [`encrypt`]/[`decrypt`] use AES-128-CBC with the **key reused as the IV**.
//!   CBC requires a unique, unpredictable IV per message, so identical
//!   plaintexts under one key produce identical ciphertexts. Do not use this
//!   scheme for new data.
//! - [`encrypt`]/[`decrypt`] are fail-soft: on any error they return their
//!   input unchanged. A caller cannot tell a failure apart from a result that
//!   happens to equal the input. Use [`try_encrypt`]/[`try_decrypt`] when the
//!   distinction matters.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use cbc::cipher::block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use md5::{Digest, Md5};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};
use tracing::debug;

use crate::classify::is_blank;
use crate::error::{CodecError, CodecResult};

type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// Characters left untouched by [`url_encode`]: alphanumerics plus `_-!.~'()*`.
const URI_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'_')
    .remove(b'-')
    .remove(b'!')
    .remove(b'.')
    .remove(b'~')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')')
    .remove(b'*');

/// MD5 of the UTF-8 bytes of `text`, as 32 lowercase hex characters.
#[tracing::instrument(skip(text), fields(text_len = text.len()))]
pub fn hash_hex(text: &str) -> String {
    hex::encode(Md5::digest(text.as_bytes()))
}

/// Encrypt `message` with AES-128-CBC/PKCS#7, using `key` as both key and IV.
///
/// Returns standard base64 with padding and no line breaks.
///
/// # Errors
///
/// [`CodecError::InvalidKeyLength`] unless `key` is exactly 16 bytes.
#[tracing::instrument(skip_all, fields(text_len = message.len()))]
pub fn try_encrypt(message: &str, key: &[u8]) -> CodecResult<String> {
    let cipher = Aes128CbcEnc::new_from_slices(key, key)
        .map_err(|_| CodecError::InvalidKeyLength { len: key.len() })?;
    let bytes = cipher.encrypt_padded_vec_mut::<Pkcs7>(message.as_bytes());
    Ok(STANDARD.encode(bytes))
}

/// Decrypt base64 `cipher_text` produced by [`try_encrypt`] with the same key.
///
/// ASCII whitespace inside the base64 (e.g. line wrapping) is ignored.
///
/// # Errors
///
/// - [`CodecError::InvalidKeyLength`] unless `key` is exactly 16 bytes
/// - [`CodecError::Base64`] if the input is not base64
/// - [`CodecError::Padding`] on a wrong key or corrupt ciphertext
/// - [`CodecError::Utf8`] if the plaintext is not UTF-8
#[tracing::instrument(skip_all, fields(text_len = cipher_text.len()))]
pub fn try_decrypt(cipher_text: &str, key: &[u8]) -> CodecResult<String> {
    let cipher = Aes128CbcDec::new_from_slices(key, key)
        .map_err(|_| CodecError::InvalidKeyLength { len: key.len() })?;

    let compact: String = cipher_text
        .chars()
        .filter(|c| !c.is_ascii_whitespace())
        .collect();
    let data = STANDARD
        .decode(compact)
        .map_err(|e| CodecError::Base64(e.to_string()))?;

    let plain = cipher
        .decrypt_padded_vec_mut::<Pkcs7>(&data)
        .map_err(|_| CodecError::Padding)?;
    String::from_utf8(plain).map_err(|_| CodecError::Utf8)
}

/// Fail-soft [`try_encrypt`]: returns `message` unchanged on any error.
pub fn encrypt(message: &str, key: &[u8]) -> String {
    try_encrypt(message, key).unwrap_or_else(|e| {
        debug!(error = %e, "encryption failed, returning input");
        message.to_string()
    })
}

/// Fail-soft [`try_decrypt`]: returns `cipher_text` unchanged on any error.
pub fn decrypt(cipher_text: &str, key: &[u8]) -> String {
    try_decrypt(cipher_text, key).unwrap_or_else(|e| {
        debug!(error = %e, "decryption failed, returning input");
        cipher_text.to_string()
    })
}

/// Percent-encode `text` as a URI component. Space becomes `%20`.
///
/// Blank input yields an empty string.
pub fn url_encode(text: &str) -> String {
    if is_blank(text) {
        return String::new();
    }
    utf8_percent_encode(text, URI_ENCODE_SET).to_string()
}

/// Decode `%XX` escapes as UTF-8. Invalid sequences become U+FFFD and
/// malformed escapes are kept literally; `+` is not treated as a space.
///
/// Blank input yields an empty string.
pub fn url_decode(text: &str) -> String {
    if is_blank(text) {
        return String::new();
    }
    percent_decode_str(text).decode_utf8_lossy().into_owned()
}

/// Escape literal `+` and `*` so they survive a later form-decoding step.
///
/// Nothing else is encoded; this is not a substitute for [`url_encode`].
pub fn preprocess_url(text: &str) -> String {
    text.replace('+', "%2B").replace('*', "%2A")
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &[u8] = b"0123456789abcdef";

    #[test]
    fn hash_of_empty_string_is_known_digest() {
        assert_eq!(hash_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
    }

    #[test]
    fn hash_uses_utf8_bytes() {
        assert_eq!(hash_hex("abc"), "900150983cd24fb0d6963f7d28e17f72");
        assert_eq!(hash_hex("中").len(), 32);
        assert_ne!(hash_hex("中"), hash_hex("中 "));
    }

    #[test]
    fn encrypt_then_decrypt_restores_message() {
        for message in ["", "hello", "exactly16bytes!!", "中文 with mixed 内容"] {
            let cipher_text = encrypt(message, KEY);
            assert_ne!(cipher_text, message);
            assert_eq!(decrypt(&cipher_text, KEY), message);
        }
    }

    #[test]
    fn ciphertext_is_single_line_base64() {
        let long = "x".repeat(200);
        let cipher_text = try_encrypt(&long, KEY).unwrap();
        assert!(!cipher_text.contains('\n'));
        assert_eq!(cipher_text.len() % 4, 0);
    }

    #[test]
    fn decrypt_tolerates_wrapped_base64() {
        let cipher_text = try_encrypt(&"y".repeat(100), KEY).unwrap();
        let (head, tail) = cipher_text.split_at(40);
        let wrapped = format!("{head}\n{tail}\n");
        assert_eq!(try_decrypt(&wrapped, KEY).unwrap(), "y".repeat(100));
    }

    #[test]
    fn key_is_also_the_iv() {
        // Same key, same plaintext: deterministic output.
        assert_eq!(encrypt("repeat", KEY), encrypt("repeat", KEY));
    }

    #[test]
    fn bad_key_length_is_reported_strictly_and_soft_returns_input() {
        assert_eq!(
            try_encrypt("hi", b"short"),
            Err(CodecError::InvalidKeyLength { len: 5 })
        );
        assert_eq!(encrypt("hi", b"short"), "hi");
        assert_eq!(decrypt("aGk=", b"short"), "aGk=");
    }

    #[test]
    fn corrupt_ciphertext_falls_back_to_input() {
        assert!(matches!(
            try_decrypt("not base64!", KEY),
            Err(CodecError::Base64(_))
        ));
        assert_eq!(decrypt("not base64!", KEY), "not base64!");

        // Valid base64, but not a whole number of blocks.
        assert_eq!(try_decrypt("aGVsbG8=", KEY), Err(CodecError::Padding));
    }

    #[test]
    fn wrong_key_does_not_yield_plaintext() {
        let cipher_text = encrypt("secret message", KEY);
        let other = b"fedcba9876543210";
        assert_ne!(decrypt(&cipher_text, other), "secret message");
    }

    #[test]
    fn url_encode_escapes_reserved_and_space() {
        assert_eq!(url_encode("a b&c=d/é"), "a%20b%26c%3Dd%2F%C3%A9");
        assert_eq!(url_encode("keep_-!.~'()*"), "keep_-!.~'()*");
        assert_eq!(url_encode("1+1"), "1%2B1");
    }

    #[test]
    fn url_decode_inverts_encode() {
        let original = "中文 & spaces + plus";
        assert_eq!(url_decode(&url_encode(original)), original);
        assert_eq!(url_decode("a+b"), "a+b");
        assert_eq!(url_decode("100%"), "100%");
    }

    #[test]
    fn url_helpers_return_empty_for_blank_input() {
        assert_eq!(url_encode("  "), "");
        assert_eq!(url_decode("\n"), "");
    }

    #[test]
    fn preprocess_url_only_touches_plus_and_star() {
        assert_eq!(preprocess_url("a+b*c d"), "a%2Bb%2Ac d");
        assert_eq!(preprocess_url("plain"), "plain");
    }
}
