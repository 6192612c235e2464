use std::io::{self, Write};
use std::path::PathBuf;

use x12_lib::handler::{Event, replay};
use x12_lib::{Configuration, Delimiters, EdiWriter};

use super::input::{exit_with, load_events};

pub struct WriteArgs {
    pub path: PathBuf,
    pub delimiters: Delimiters,
    pub newline: bool,
}

pub fn run(args: WriteArgs) {
    let events = load_events(&args.path).unwrap_or_else(|e| exit_with(e));
    let bytes = write_events(&events, args.delimiters, args.newline).unwrap_or_else(|e| exit_with(e));

    if let Err(e) = io::stdout().lock().write_all(&bytes) {
        exit_with(e);
    }
}

/// Serializes a recorded stream; ISA16 is written from `delimiters`.
pub fn write_events(
    events: &[Event],
    delimiters: Delimiters,
    newline: bool,
) -> x12_lib::Result<Vec<u8>> {
    let config = Configuration::builder()
        .delimiters(delimiters)
        .sub_element_separator(delimiters.sub_element_separator)
        .build()?;

    let mut writer = EdiWriter::new(Vec::new(), config).line_breaks(newline);
    replay(events, &mut writer)?;
    Ok(writer.into_inner())
}
