//! Shared helpers for unit tests.

use crate::config::Configuration;
use crate::handler::{Event, render_tree};
use crate::parser::{ParseContext, Parser, SegmentListParser, SegmentParserFactory};
use crate::tokenizer::Tokenizer;
use crate::Result;

/// `~ * |` with the sub-element separator already assigned.
pub fn config() -> Configuration {
    Configuration::builder()
        .sub_element_separator('|')
        .build()
        .unwrap()
}

pub fn context(input: &str) -> ParseContext<&[u8]> {
    context_with(input, config())
}

pub fn context_with(input: &str, config: Configuration) -> ParseContext<&[u8]> {
    ParseContext::new(
        Tokenizer::new(input.as_bytes(), config),
        SegmentParserFactory::default(),
    )
}

/// Debug form of every token, one per line.
pub fn dump_tokens(input: &str, config: Configuration) -> String {
    Tokenizer::new(input.as_bytes(), config)
        .map(|token| format!("{:?}\n", token.unwrap()))
        .collect()
}

/// Parses `input` as a run of segments, recording every event.
pub fn parse_events(input: &str) -> Result<Vec<Event>> {
    let mut ctx = context(input);
    let mut events: Vec<Event> = Vec::new();
    if let Some(start) = ctx.next_token()? {
        SegmentListParser.parse(&mut ctx, &mut events, start)?;
    }
    Ok(events)
}

pub fn parse_tree(input: &str) -> String {
    render_tree(&parse_events(input).unwrap())
}
