//! Codec commands: hash, cipher and URL encoding.

use anyhow::{Context, bail};
use clap::Args;
use tracing::{debug, instrument};

use textkit_core::codec;

use super::{TextArgs, emit, read_input};

/// Arguments for the `encrypt` and `decrypt` subcommands.
#[derive(Args, Debug, Default)]
pub struct CipherArgs {
    /// Input text. Read from stdin when omitted.
    pub text: Option<String>,

    /// 16-byte key, also used as the IV (falls back to `cipher_key` in config).
    #[arg(short, long)]
    pub key: Option<String>,

    /// Fail instead of echoing the input when the cipher fails.
    #[arg(long)]
    pub strict: bool,
}

/// Which direction to run the cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CipherMode {
    /// Plaintext to base64 ciphertext.
    Encrypt,
    /// Base64 ciphertext to plaintext.
    Decrypt,
}

impl CipherMode {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Encrypt => "encrypt",
            Self::Decrypt => "decrypt",
        }
    }
}

/// Print the MD5 hex digest of the input.
#[instrument(name = "cmd_hash", skip_all)]
pub fn cmd_hash(args: TextArgs, global_json: bool, max_input: Option<usize>) -> anyhow::Result<()> {
    let text = read_input(args.text, max_input)?;
    debug!(text_len = text.len(), "executing hash command");
    emit("hash", &codec::hash_hex(&text), global_json)
}

/// Encrypt or decrypt the input.
///
/// In the default (fail-soft) mode a cipher failure prints the input
/// unchanged and exits 0; `--strict` or `strict = true` turns it into an error.
#[instrument(name = "cmd_cipher", skip_all, fields(mode = mode.as_str()))]
pub fn cmd_cipher(
    mode: CipherMode,
    args: CipherArgs,
    global_json: bool,
    config_key: Option<&str>,
    config_strict: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let strict = args.strict || config_strict;
    debug!(strict, key_from_args = args.key.is_some(), "executing cipher command");

    let Some(key) = args.key.as_deref().or(config_key) else {
        bail!("no cipher key: pass --key or set cipher_key in the config file");
    };
    let text = read_input(args.text, max_input)?;

    let output = match (mode, strict) {
        (CipherMode::Encrypt, true) => {
            codec::try_encrypt(&text, key.as_bytes()).context("encryption failed")?
        }
        (CipherMode::Decrypt, true) => {
            codec::try_decrypt(&text, key.as_bytes()).context("decryption failed")?
        }
        (CipherMode::Encrypt, false) => codec::encrypt(&text, key.as_bytes()),
        (CipherMode::Decrypt, false) => codec::decrypt(&text, key.as_bytes()),
    };

    emit(mode.as_str(), &output, global_json)
}

/// Percent-encode the input as a URI component.
#[instrument(name = "cmd_url_encode", skip_all)]
pub fn cmd_url_encode(
    args: TextArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let text = read_input(args.text, max_input)?;
    emit("url-encode", &codec::url_encode(&text), global_json)
}

/// Decode percent-escapes in the input.
#[instrument(name = "cmd_url_decode", skip_all)]
pub fn cmd_url_decode(
    args: TextArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let text = read_input(args.text, max_input)?;
    emit("url-decode", &codec::url_decode(&text), global_json)
}

/// Escape literal `+` and `*` in the input.
#[instrument(name = "cmd_preprocess_url", skip_all)]
pub fn cmd_preprocess_url(
    args: TextArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let text = read_input(args.text, max_input)?;
    emit("preprocess-url", &codec::preprocess_url(&text), global_json)
}
