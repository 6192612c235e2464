//! Events back to delimited text.
//!
//! `EdiWriter` is the serializing [`EdiHandler`]. Loop events carry no text.
//! Segments reported inside another segment (loop children) are written
//! after it: the parent's terminator goes out when its first child starts.
//!
//! Reading then writing reproduces the input byte for byte only when no
//! segment ends in an element separator. The reader reports no element for a
//! separator directly before the terminator, so `NM1*A*~` is written back as
//! `NM1*A~` and `NM1**~` as `NM1*~`.

use std::io::Write;

use crate::config::Configuration;
use crate::handler::EdiHandler;
use crate::location::Location;
use crate::Result;

const INTERCHANGE_HEADER: &str = "ISA";
const SUB_ELEMENT_SEPARATOR_ELEMENT: u32 = 16;

pub struct EdiWriter<W: Write> {
    out: W,
    config: Configuration,
    location: Location,
    /// One flag per open segment: whether its terminator is already written.
    open_segments: Vec<bool>,
    components: u32,
    line_breaks: bool,
}

impl<W: Write> EdiWriter<W> {
    /// `config` must have its sub-element separator assigned before any
    /// composite element or ISA16 is written.
    pub fn new(out: W, config: Configuration) -> Self {
        Self {
            out,
            config,
            location: Location::new(),
            open_segments: Vec::new(),
            components: 0,
            line_breaks: false,
        }
    }

    /// Write `\n` after every segment terminator.
    pub fn line_breaks(mut self, enabled: bool) -> Self {
        self.line_breaks = enabled;
        self
    }

    pub fn config(&self) -> &Configuration {
        &self.config
    }

    pub fn location(&self) -> &Location {
        &self.location
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn write_char(&mut self, ch: char) -> Result<()> {
        let mut buf = [0u8; 4];
        self.out.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
        Ok(())
    }

    fn terminate(&mut self) -> Result<()> {
        self.write_char(self.config.segment_terminator())?;
        if self.line_breaks {
            self.out.write_all(b"\n")?;
        }
        Ok(())
    }
}

impl<W: Write> EdiHandler for EdiWriter<W> {
    fn start_segment(&mut self, id: &str) -> Result<()> {
        if let Some(terminated) = self.open_segments.last_mut()
            && !*terminated
        {
            *terminated = true;
            self.terminate()?;
        }
        self.open_segments.push(false);
        self.location.start_segment(id);
        self.out.write_all(id.as_bytes())?;
        Ok(())
    }

    fn end_segment(&mut self) -> Result<()> {
        if let Some(false) = self.open_segments.pop() {
            self.terminate()?;
        }
        self.location.end_segment();
        Ok(())
    }

    fn start_element(&mut self, contents: &str) -> Result<()> {
        self.location.next_element();
        self.components = 0;
        self.write_char(self.config.element_separator())?;

        if self.location.segment() == INTERCHANGE_HEADER
            && self.location.element() == SUB_ELEMENT_SEPARATOR_ELEMENT
        {
            let separator = self.config.sub_element_separator()?;
            return self.write_char(separator);
        }
        self.out.write_all(contents.as_bytes())?;
        Ok(())
    }

    fn end_element(&mut self) -> Result<()> {
        self.location.clear_sub_element();
        Ok(())
    }

    fn sub_element(&mut self, contents: &str) -> Result<()> {
        self.location.next_sub_element();
        if self.components > 0 {
            self.write_char(self.config.sub_element_separator()?)?;
        }
        self.components += 1;
        self.out.write_all(contents.as_bytes())?;
        Ok(())
    }

    fn start_loop(&mut self, _id: &str) -> Result<()> {
        Ok(())
    }

    fn end_loop(&mut self) -> Result<()> {
        Ok(())
    }

    fn end_document(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }
}
