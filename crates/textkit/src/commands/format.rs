//! Formatter commands: byte sizes, phone numbers and numeric-key ordering.

use std::collections::BTreeMap;

use anyhow::Context;
use clap::Args;
use tracing::{debug, instrument};

use textkit_core::format;

use super::{TextArgs, emit, read_input};

/// Arguments for the `format-size` subcommand.
#[derive(Args, Debug)]
pub struct FormatSizeArgs {
    /// Size in bytes.
    pub bytes: u64,
}

/// Arguments for the `format-phone` subcommand.
#[derive(Args, Debug, Default)]
pub struct FormatPhoneArgs {
    /// 11-character phone number. Read from stdin when omitted.
    pub text: Option<String>,

    /// Fail on inputs that are not 11 characters instead of printing an empty line.
    #[arg(long)]
    pub strict: bool,
}

/// Print a human-readable byte size.
#[instrument(name = "cmd_format_size", skip_all, fields(bytes = args.bytes))]
pub fn cmd_format_size(args: FormatSizeArgs, global_json: bool) -> anyhow::Result<()> {
    debug!("executing format-size command");
    emit("format-size", &format::format_byte_size(args.bytes), global_json)
}

/// Print an 11-character phone number grouped as `3 4 4`.
///
/// Other lengths print an empty line unless strict mode is on.
#[instrument(name = "cmd_format_phone", skip_all)]
pub fn cmd_format_phone(
    args: FormatPhoneArgs,
    global_json: bool,
    config_strict: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let strict = args.strict || config_strict;
    let text = read_input(args.text, max_input)?;
    debug!(strict, len = text.chars().count(), "executing format-phone command");

    let output = if strict {
        format::try_format_phone_number(&text)?
    } else {
        format::format_phone_number(&text)
    };
    emit("format-phone", &output, global_json)
}

/// Read a JSON object and print its entries ordered by numeric key.
///
/// Prints `null` for an empty object. A non-numeric key is an error.
#[instrument(name = "cmd_sort_keys", skip_all)]
pub fn cmd_sort_keys(
    args: TextArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let text = read_input(args.text, max_input)?;
    let map: BTreeMap<String, bool> =
        serde_json::from_str(&text).context("input must be a JSON object of boolean values")?;
    debug!(entries = map.len(), "executing sort-keys command");

    let sorted = format::sort_by_numeric_key(map).context("failed to sort keys")?;

    if global_json {
        println!("{}", serde_json::to_string_pretty(&sorted)?);
    } else {
        println!("{}", serde_json::to_string(&sorted)?);
    }
    Ok(())
}
