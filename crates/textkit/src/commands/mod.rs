//! Command implementations.

use std::io::Read;

use anyhow::{Context, bail};
use clap::Args;
use serde::Serialize;

pub mod classify;
pub mod codec;
pub mod format;
pub mod info;
pub mod parse;
#[cfg(feature = "mcp")]
pub mod serve;
pub mod transform;

/// Input shared by every single-text subcommand.
#[derive(Args, Debug, Default)]
pub struct TextArgs {
    /// Input text. Read from stdin when omitted.
    pub text: Option<String>,
}

/// Resolve the text argument, falling back to stdin.
///
/// One trailing line ending is stripped from stdin input. Input longer than
/// `max_bytes` is rejected before it is processed.
pub fn read_input(text: Option<String>, max_bytes: Option<usize>) -> anyhow::Result<String> {
    let content = match text {
        Some(text) => text,
        None => {
            let mut bytes = Vec::new();
            let mut stdin = std::io::stdin().lock();
            let read = match max_bytes {
                // Slack for a trailing CRLF, which is stripped before the check.
                Some(max) => (&mut stdin).take(max as u64 + 2).read_to_end(&mut bytes),
                None => stdin.read_to_end(&mut bytes),
            };
            read.context("failed to read stdin")?;
            strip_line_ending(&mut bytes);
            check_limit(bytes.len(), max_bytes)?;
            return String::from_utf8(bytes).context("stdin is not valid UTF-8");
        }
    };

    check_limit(content.len(), max_bytes)?;
    Ok(content)
}

fn check_limit(len: usize, max_bytes: Option<usize>) -> anyhow::Result<()> {
    if let Some(max) = max_bytes
        && len > max
    {
        bail!("input too large: {len} bytes (limit: {max} bytes)");
    }
    Ok(())
}

fn strip_line_ending(buf: &mut Vec<u8>) {
    if buf.last() == Some(&b'\n') {
        buf.pop();
        if buf.last() == Some(&b'\r') {
            buf.pop();
        }
    }
}

#[derive(Serialize)]
struct TextOutput<'a> {
    operation: &'a str,
    output: &'a str,
}

/// Print a single-line result, or `{"operation", "output"}` with `--json`.
pub fn emit(operation: &str, output: &str, json: bool) -> anyhow::Result<()> {
    if json {
        let payload = TextOutput { operation, output };
        println!("{}", serde_json::to_string_pretty(&payload)?);
    } else {
        println!("{output}");
    }
    Ok(())
}
