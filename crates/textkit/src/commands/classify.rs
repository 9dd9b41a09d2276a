//! Classify command — run every predicate over the input.

use std::fmt::Display;

use owo_colors::{OwoColorize, Stream};
use tracing::{debug, instrument};

use textkit_core::classify;

use super::{TextArgs, read_input};

/// Print the classification report for the input.
#[instrument(name = "cmd_classify", skip_all)]
pub fn cmd_classify(
    args: TextArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let text = read_input(args.text, max_input)?;
    debug!(text_len = text.len(), "executing classify command");

    let report = classify::classify(&text);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    print_row("Characters", report.chars);
    print_flag("Blank", report.blank);
    print_flag("ASCII letters only", report.ascii_alpha);
    print_flag("Contains CJK", report.contains_cjk);
    print_row("CJK chars", report.cjk_chars);
    print_row("Ideographs", report.ideographs);
    print_row("CJK punctuation", report.cjk_punctuation);

    Ok(())
}

fn print_row(label: &str, value: impl Display) {
    println!(
        "{}: {value}",
        label.if_supports_color(Stream::Stdout, |t| t.dimmed())
    );
}

fn print_flag(label: &str, value: bool) {
    if value {
        print_row(label, "yes".if_supports_color(Stream::Stdout, |t| t.green()));
    } else {
        print_row(label, "no".if_supports_color(Stream::Stdout, |t| t.yellow()));
    }
}
