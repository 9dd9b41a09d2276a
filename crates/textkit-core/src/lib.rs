//! Core library for textkit.
//!
//! Stateless string utilities grouped into facets. Every function is pure
//! and safe to call from any thread.
//!
//! # Modules
//!
//! - [`classify`] - Blank, CJK and ASCII-letter predicates
//! - [`codec`] - MD5 hex digest, AES-128-CBC cipher, URL percent-encoding
//! - [`format`] - Byte sizes, phone numbers, numeric-key ordering
//! - [`transform`] - First-letter case, reversal, full/half-width conversion
//! - [`parse`] - Lenient parsing with fallback values
//! - [`config`] - Configuration loading and management
//! - [`error`] - Error types and result aliases
//!
//! # Quick Start
//!
//! ```
//! use textkit_core::{codec, format, transform};
//!
//! assert_eq!(format::format_phone_number("13912345678"), "139 1234 5678");
//! assert_eq!(transform::to_half_width("ＡＢＣ"), "ABC");
//! assert_eq!(codec::hash_hex(""), "d41d8cd98f00b204e9800998ecf8427e");
//! ```
#![deny(unsafe_code)]

pub mod classify;
pub mod codec;
pub mod config;
pub mod error;
pub mod format;
pub mod parse;
pub mod transform;

pub use config::{Config, ConfigLoader, ConfigSources, LogLevel};

pub use error::{CodecError, CodecResult, ConfigError, ConfigResult, FormatError, FormatResult};

/// Default cap on input read from stdin (1 MiB).
pub const DEFAULT_MAX_INPUT_BYTES: usize = 1024 * 1024;
