use tracing::info;

use super::events::record_events;
use super::input::{SourceArgs, display_path, exit_with};

pub struct CheckArgs {
    pub source: SourceArgs,
}

pub fn run(args: CheckArgs) {
    let text = args.source.read().unwrap_or_else(|e| exit_with(e));
    let reader = args.source.reader().unwrap_or_else(|e| exit_with(e));

    match record_events(&reader, &text) {
        Ok((_, summary)) => info!(
            path = %display_path(&args.source.path),
            segments = summary.segments,
            "document is well-formed"
        ),
        Err(err) => args.source.exit_with_parse_error(&err, &text),
    }
}
