use std::io::{self, Write};

use x12_lib::handler::replay;
use x12_lib::{Configuration, EdiReader, EdiWriter};

use super::events::record_events;
use super::input::{SourceArgs, exit_with};

/// Output delimiters; `None` keeps the input's.
#[derive(Clone, Copy, Debug, Default)]
pub struct OutputDelimiters {
    pub segment_terminator: Option<char>,
    pub element_separator: Option<char>,
    pub sub_element_separator: Option<char>,
}

impl OutputDelimiters {
    pub fn resolve(&self, input: &Configuration) -> x12_lib::Result<Configuration> {
        let sub_element_separator = match self.sub_element_separator {
            Some(ch) => ch,
            None => input.sub_element_separator()?,
        };

        let config = Configuration::builder()
            .segment_terminator(
                self.segment_terminator
                    .unwrap_or(input.segment_terminator()),
            )
            .element_separator(self.element_separator.unwrap_or(input.element_separator()))
            .sub_element_separator(sub_element_separator)
            .build()?;
        Ok(config)
    }
}

pub struct ReformatArgs {
    pub source: SourceArgs,
    pub output: OutputDelimiters,
    pub newline: bool,
}

pub fn run(args: ReformatArgs) {
    let text = args.source.read().unwrap_or_else(|e| exit_with(e));
    let reader = args.source.reader().unwrap_or_else(|e| exit_with(e));

    let bytes = match reformat(&reader, &text, &args.output, args.newline) {
        Ok(bytes) => bytes,
        Err(err) => args.source.exit_with_parse_error(&err, &text),
    };

    if let Err(e) = io::stdout().lock().write_all(&bytes) {
        exit_with(e);
    }
}

/// Parses `text` and writes it back with `output` delimiters.
pub fn reformat(
    reader: &EdiReader,
    text: &str,
    output: &OutputDelimiters,
    newline: bool,
) -> x12_lib::Result<Vec<u8>> {
    let (events, summary) = record_events(reader, text)?;
    let config = output.resolve(&summary.configuration)?;

    let mut writer = EdiWriter::new(Vec::new(), config).line_breaks(newline);
    replay(&events, &mut writer)?;
    Ok(writer.into_inner())
}
