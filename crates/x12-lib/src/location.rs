//! Position cursor for diagnostics.
//!
//! Tracks both the character position (line, column, byte offset) and the
//! structural position (segment, element, sub-element). Parsers update it as
//! they go; nothing reads it to make parse decisions.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    line: u32,
    column: u32,
    offset: usize,
    segment: String,
    element: u32,
    sub_element: Option<u32>,
}

impl Default for Location {
    fn default() -> Self {
        Self::new()
    }
}

impl Location {
    pub fn new() -> Self {
        Self {
            line: 1,
            column: 0,
            offset: 0,
            segment: String::new(),
            element: 0,
            sub_element: None,
        }
    }

    /// A structural position without character information.
    pub fn at(segment: impl Into<String>, element: u32, sub_element: Option<u32>) -> Self {
        Self {
            segment: segment.into(),
            element,
            sub_element,
            ..Self::new()
        }
    }

    /// 1-based line of the last consumed character.
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Column of the last consumed character; 0 right after a line break.
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Byte offset just past the last consumed character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn segment(&self) -> &str {
        &self.segment
    }

    /// 1-based index of the current element; 0 before the first one.
    pub fn element(&self) -> u32 {
        self.element
    }

    /// 1-based index of the current sub-element, if inside a composite.
    pub fn sub_element(&self) -> Option<u32> {
        self.sub_element
    }

    pub(crate) fn advance(&mut self, ch: char) {
        self.offset += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }
    }

    pub fn start_segment(&mut self, segment: &str) {
        segment.clone_into(&mut self.segment);
        self.element = 0;
        self.sub_element = None;
    }

    pub fn end_segment(&mut self) {
        self.sub_element = None;
    }

    pub fn next_element(&mut self) {
        self.element += 1;
    }

    pub fn next_sub_element(&mut self) {
        self.sub_element = Some(self.sub_element.map_or(1, |n| n + 1));
    }

    pub fn clear_sub_element(&mut self) {
        self.sub_element = None;
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.segment.is_empty() {
            write!(f, "segment {}", self.segment)?;
            if self.element > 0 {
                write!(f, ", element {}", self.element)?;
            }
            if let Some(sub_element) = self.sub_element {
                write!(f, ", sub-element {sub_element}")?;
            }
            f.write_str(" ")?;
        }
        write!(f, "(line {}, column {})", self.line, self.column)
    }
}
