//! Parse command — lenient int/long/bool parsing.

use clap::{Args, ValueEnum};
use tracing::{debug, instrument};

use textkit_core::parse;

use super::{emit, read_input};

/// Target type for the `parse` subcommand.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ParseKind {
    /// 32-bit integer (falls back to `--default`).
    #[default]
    Int,
    /// 64-bit integer (falls back to 0).
    Long,
    /// `true` in any case, anything else is false.
    Bool,
}

/// Arguments for the `parse` subcommand.
#[derive(Args, Debug, Default)]
pub struct ParseArgs {
    /// Input text. Read from stdin when omitted.
    pub text: Option<String>,

    /// Type to parse as.
    #[arg(long = "as", value_enum, default_value_t)]
    pub kind: ParseKind,

    /// Fallback for `--as int`.
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    pub default: i32,
}

/// Parse the input and print the value; never fails on malformed input.
#[instrument(name = "cmd_parse", skip_all, fields(kind = ?args.kind))]
pub fn cmd_parse(args: ParseArgs, global_json: bool, max_input: Option<usize>) -> anyhow::Result<()> {
    let text = read_input(args.text, max_input)?;
    debug!(text_len = text.len(), "executing parse command");

    let value = match args.kind {
        ParseKind::Int => parse::to_int(&text, args.default).to_string(),
        ParseKind::Long => parse::to_long(&text).to_string(),
        ParseKind::Bool => parse::to_bool(&text).to_string(),
    };
    emit("parse", &value, global_json)
}
