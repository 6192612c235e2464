//! Recorded events.

use std::fmt::Write as _;

use serde::{Deserialize, Serialize};

use super::EdiHandler;
use crate::Result;

/// One [`EdiHandler`] callback as a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum Event {
    StartSegment { id: String },
    EndSegment,
    StartElement { contents: String },
    EndElement,
    SubElement { contents: String },
    StartLoop { id: String },
    EndLoop,
}

impl EdiHandler for Vec<Event> {
    fn start_segment(&mut self, id: &str) -> Result<()> {
        self.push(Event::StartSegment { id: id.to_owned() });
        Ok(())
    }

    fn end_segment(&mut self) -> Result<()> {
        self.push(Event::EndSegment);
        Ok(())
    }

    fn start_element(&mut self, contents: &str) -> Result<()> {
        self.push(Event::StartElement {
            contents: contents.to_owned(),
        });
        Ok(())
    }

    fn end_element(&mut self) -> Result<()> {
        self.push(Event::EndElement);
        Ok(())
    }

    fn sub_element(&mut self, contents: &str) -> Result<()> {
        self.push(Event::SubElement {
            contents: contents.to_owned(),
        });
        Ok(())
    }

    fn start_loop(&mut self, id: &str) -> Result<()> {
        self.push(Event::StartLoop { id: id.to_owned() });
        Ok(())
    }

    fn end_loop(&mut self) -> Result<()> {
        self.push(Event::EndLoop);
        Ok(())
    }
}

/// Drives `handler` with a recorded stream, then signals end of document.
pub fn replay(events: &[Event], handler: &mut dyn EdiHandler) -> Result<()> {
    for event in events {
        match event {
            Event::StartSegment { id } => handler.start_segment(id)?,
            Event::EndSegment => handler.end_segment()?,
            Event::StartElement { contents } => handler.start_element(contents)?,
            Event::EndElement => handler.end_element()?,
            Event::SubElement { contents } => handler.sub_element(contents)?,
            Event::StartLoop { id } => handler.start_loop(id)?,
            Event::EndLoop => handler.end_loop()?,
        }
    }
    handler.end_document()
}

/// Indented outline of an event stream, two spaces per level.
pub fn render_tree(events: &[Event]) -> String {
    let mut out = String::new();
    let mut depth = 0usize;

    for event in events {
        let indent = "  ".repeat(depth);
        match event {
            Event::StartLoop { id } => {
                writeln!(out, "{indent}Loop {id}").expect("String write never fails");
                depth += 1;
            }
            Event::StartSegment { id } => {
                writeln!(out, "{indent}Segment {id}").expect("String write never fails");
                depth += 1;
            }
            Event::StartElement { contents } => {
                writeln!(out, "{indent}Element {contents:?}").expect("String write never fails");
                depth += 1;
            }
            Event::SubElement { contents } => {
                writeln!(out, "{indent}SubElement {contents:?}").expect("String write never fails");
            }
            Event::EndLoop | Event::EndSegment | Event::EndElement => {
                depth = depth.saturating_sub(1);
            }
        }
    }

    out
}
