//! Error types for textkit-core.

use thiserror::Error;

/// Errors that can occur when working with configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to deserialize configuration.
    #[error("invalid configuration: {0}")]
    Deserialize(#[from] Box<figment::Error>),
}

/// Result type alias using [`ConfigError`].
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Errors from the strict cipher variants.
///
/// The fail-soft [`encrypt`](crate::codec::encrypt) and
/// [`decrypt`](crate::codec::decrypt) swallow these and hand back their input.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The key is not a valid AES-128 key/IV (must be exactly 16 bytes).
    #[error("invalid key length: {len} bytes (expected 16)")]
    InvalidKeyLength {
        /// Length of the key that was supplied.
        len: usize,
    },

    /// The ciphertext is not valid base64.
    #[error("ciphertext is not valid base64: {0}")]
    Base64(String),

    /// Decryption produced invalid PKCS#7 padding (wrong key or corrupt data).
    #[error("bad padding: wrong key or corrupt ciphertext")]
    Padding,

    /// The decrypted bytes are not valid UTF-8.
    #[error("decrypted bytes are not valid UTF-8")]
    Utf8,
}

/// Result type alias using [`CodecError`].
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors from the formatter's fail-loud paths.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    /// A map key could not be parsed as a 32-bit integer.
    #[error("non-numeric key: {key:?}")]
    NonNumericKey {
        /// The offending key.
        key: String,
    },

    /// Phone number was not exactly 11 characters (strict variant only).
    #[error("phone number must be 11 characters, got {len}")]
    PhoneLength {
        /// Character count of the input.
        len: usize,
    },
}

/// Result type alias using [`FormatError`].
pub type FormatResult<T> = Result<T, FormatError>;
