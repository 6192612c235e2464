//! Hierarchical level bookkeeping.

use serde::Serialize;

use super::EdiHandler;
use crate::error::{Error, ErrorKind};
use crate::Result;

/// HL01..HL04 of one hierarchical level segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HlInfo {
    pub this_level: i32,
    pub parent_level: Option<i32>,
    pub code: i32,
    pub has_child_node: bool,
}

impl HlInfo {
    /// Builds the info from HL element texts in order.
    ///
    /// HL02 may be blank (top of the hierarchy) and HL04 may be absent.
    pub fn from_elements(elements: &[String]) -> Result<Self> {
        let this_level = number(elements, 1)?;
        let parent_level = match elements.get(1) {
            Some(text) if !text.is_empty() => Some(number(elements, 2)?),
            _ => None,
        };
        let code = number(elements, 3)?;
        let has_child_node = match elements.get(3) {
            Some(_) => number(elements, 4)? != 0,
            None => false,
        };

        Ok(Self {
            this_level,
            parent_level,
            code,
            has_child_node,
        })
    }
}

fn number(elements: &[String], element: u32) -> Result<i32> {
    let text = elements
        .get(element as usize - 1)
        .map(String::as_str)
        .unwrap_or_default();
    text.trim().parse().map_err(|_| {
        Error::new(ErrorKind::MalformedHierarchy {
            element,
            value: text.to_owned(),
        })
    })
}

/// Forwards every callback and keeps the text of each element it sees.
pub struct HlCapture<H> {
    inner: H,
    elements: Vec<String>,
}

impl<H: EdiHandler> HlCapture<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            elements: Vec::with_capacity(4),
        }
    }

    pub fn elements(&self) -> &[String] {
        &self.elements
    }

    pub fn into_elements(self) -> Vec<String> {
        self.elements
    }
}

impl<H: EdiHandler> EdiHandler for HlCapture<H> {
    fn start_segment(&mut self, id: &str) -> Result<()> {
        self.inner.start_segment(id)
    }

    fn end_segment(&mut self) -> Result<()> {
        self.inner.end_segment()
    }

    fn start_element(&mut self, contents: &str) -> Result<()> {
        self.elements.push(contents.to_owned());
        self.inner.start_element(contents)
    }

    fn end_element(&mut self) -> Result<()> {
        self.inner.end_element()
    }

    fn sub_element(&mut self, contents: &str) -> Result<()> {
        // Composite HL elements keep their first component as the value.
        if let Some(last) = self.elements.last_mut()
            && last.is_empty()
        {
            contents.clone_into(last);
        }
        self.inner.sub_element(contents)
    }

    fn start_loop(&mut self, id: &str) -> Result<()> {
        self.inner.start_loop(id)
    }

    fn end_loop(&mut self) -> Result<()> {
        self.inner.end_loop()
    }

    fn end_document(&mut self) -> Result<()> {
        self.inner.end_document()
    }
}
