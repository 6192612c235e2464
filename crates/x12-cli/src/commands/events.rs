use x12_lib::{EdiReader, ParseSummary};
use x12_lib::handler::{Event, TracingHandler, render_tree};

use super::input::{SourceArgs, exit_with};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EventFormat {
    #[default]
    Tree,
    Json,
}

pub struct EventsArgs {
    pub source: SourceArgs,
    pub format: EventFormat,
}

pub fn run(args: EventsArgs) {
    let text = args.source.read().unwrap_or_else(|e| exit_with(e));
    let reader = args.source.reader().unwrap_or_else(|e| exit_with(e));

    let events = match record_events(&reader, &text) {
        Ok((events, _)) => events,
        Err(err) => args.source.exit_with_parse_error(&err, &text),
    };

    let out = render_events(&events, args.format).unwrap_or_else(|e| exit_with(e));
    print!("{}", out);
}

/// Parses `text`, logging every callback at trace level.
pub fn record_events(
    reader: &EdiReader,
    text: &str,
) -> x12_lib::Result<(Vec<Event>, ParseSummary)> {
    let mut recorder = TracingHandler::new(Vec::<Event>::new());
    let summary = reader.parse_str(text, &mut recorder)?;
    Ok((recorder.into_inner(), summary))
}

pub fn render_events(events: &[Event], format: EventFormat) -> serde_json::Result<String> {
    match format {
        EventFormat::Tree => Ok(render_tree(events)),
        EventFormat::Json => {
            let mut json = serde_json::to_string_pretty(events)?;
            json.push('\n');
            Ok(json)
        }
    }
}
