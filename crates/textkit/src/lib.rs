//! Library interface for the `textkit` CLI.
//!
//! This crate exposes the CLI's argument parser and command structure as a library,
//! primarily for documentation generation and testing. The actual entry point is
//! in `main.rs`.
//!
//! # Structure
//!
//! - [`Cli`] - The root argument parser (clap derive)
//! - [`Commands`] - Available subcommands
//! - [`commands`] - Command implementations
//!
//! # Documentation Generation
//!
//! The [`command()`] function returns the clap `Command` for generating man pages
//! and shell completions via `xtask`.

pub mod commands;

#[cfg(feature = "mcp")]
pub mod server;

use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;

/// Color output preference.
#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
pub enum ColorChoice {
    /// Detect terminal capabilities automatically.
    #[default]
    Auto,
    /// Always emit colors.
    Always,
    /// Never emit colors.
    Never,
}

impl ColorChoice {
    /// Configure global color output based on this choice.
    ///
    /// Call this once at startup to set the color mode.
    pub fn apply(self) {
        match self {
            Self::Auto => {} // owo-colors auto-detects by default
            Self::Always => owo_colors::set_override(true),
            Self::Never => owo_colors::set_override(false),
        }
    }
}

const ENV_HELP: &str = "\
ENVIRONMENT VARIABLES:
    RUST_LOG               Log filter (e.g., debug, textkit=trace)
    TEXTKIT_LOG_PATH       Explicit JSONL log file path
    TEXTKIT_LOG_DIR        JSONL log directory
    TEXTKIT_CIPHER_KEY     Default key for encrypt/decrypt
    TEXTKIT_STRICT         Report failures instead of falling back (true/false)
";

/// Command-line interface definition for textkit.
#[derive(Parser)]
#[command(name = "textkit")]
#[command(about = "Stateless text utilities: classify, encode, format, transform", long_about = None)]
#[command(version, arg_required_else_help = true)]
#[command(after_long_help = ENV_HELP)]
pub struct Cli {
    /// The subcommand to execute.
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Print only the version number (for scripting)
    #[arg(long)]
    pub version_only: bool,

    /// Path to configuration file (overrides discovery)
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Run as if started in DIR
    #[arg(short = 'C', long, global = true)]
    pub chdir: Option<PathBuf>,

    /// Only print errors (suppresses warnings/info)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// More detail (repeatable; e.g. -vv)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Colorize output
    #[arg(long, global = true, value_enum, default_value_t)]
    pub color: ColorChoice,

    /// Output as JSON (for scripting)
    #[arg(long, global = true)]
    pub json: bool,
}

/// Available subcommands for the CLI.
#[derive(Subcommand)]
pub enum Commands {
    /// MD5 hex digest of the text
    Hash(commands::TextArgs),

    /// Encrypt with AES-128-CBC (key doubles as IV), output base64
    Encrypt(commands::codec::CipherArgs),

    /// Decrypt base64 produced by `encrypt`
    Decrypt(commands::codec::CipherArgs),

    /// Percent-encode as a URI component
    UrlEncode(commands::TextArgs),

    /// Decode percent-escapes
    UrlDecode(commands::TextArgs),

    /// Escape literal `+` and `*` only
    PreprocessUrl(commands::TextArgs),

    /// Format a byte count (bytes/KB/MB/GB)
    FormatSize(commands::format::FormatSizeArgs),

    /// Group an 11-digit phone number as 3-4-4
    FormatPhone(commands::format::FormatPhoneArgs),

    /// Order a JSON object of booleans by numeric key
    SortKeys(commands::TextArgs),

    /// Reverse the text by code point
    Reverse(commands::TextArgs),

    /// Uppercase an ASCII first letter
    UpperFirst(commands::TextArgs),

    /// Lowercase an ASCII first letter
    LowerFirst(commands::TextArgs),

    /// Convert ASCII to full-width forms (SBC)
    ToFullWidth(commands::TextArgs),

    /// Convert full-width forms to ASCII (DBC)
    ToHalfWidth(commands::TextArgs),

    /// Report blank/CJK/ASCII predicates for the text
    Classify(commands::TextArgs),

    /// Parse leniently as int, long or bool
    Parse(commands::parse::ParseArgs),

    /// Show package information
    Info(commands::info::InfoArgs),

    /// Start MCP (Model Context Protocol) server on stdio
    #[cfg(feature = "mcp")]
    Serve(commands::serve::ServeArgs),
}

/// Returns the clap command for documentation generation
pub fn command() -> clap::Command {
    Cli::command()
}
