//! Transform commands: reverse, first-letter case, width conversion.

use tracing::{debug, instrument};

use textkit_core::transform::Transform;

use super::{TextArgs, emit, read_input};

/// Apply one named transform to the input and print the result.
#[instrument(name = "cmd_transform", skip_all, fields(transform = %transform))]
pub fn cmd_transform(
    transform: Transform,
    args: TextArgs,
    global_json: bool,
    max_input: Option<usize>,
) -> anyhow::Result<()> {
    let text = read_input(args.text, max_input)?;
    debug!(text_len = text.len(), "executing transform command");
    emit(transform.as_str(), &transform.apply(&text), global_json)
}
