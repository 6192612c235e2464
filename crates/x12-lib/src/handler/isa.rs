use super::EdiHandler;
use crate::Result;

/// ISA16 carries the sub-element separator.
const SUB_ELEMENT_SEPARATOR_ELEMENT: u32 = 16;

/// Watches the interchange header for the sub-element separator.
///
/// Wraps the handler only while the `ISA` segment is parsed. The separator
/// is captured here and assigned by the reader before the next token is
/// read, so no following segment is tokenized without it.
pub struct IsaHandler<H> {
    inner: H,
    elements: u32,
    discovered: Option<char>,
}

impl<H: EdiHandler> IsaHandler<H> {
    pub fn new(inner: H) -> Self {
        Self {
            inner,
            elements: 0,
            discovered: None,
        }
    }

    /// First character of ISA16, if the segment reached it with content.
    pub fn discovered(&self) -> Option<char> {
        self.discovered
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: EdiHandler> EdiHandler for IsaHandler<H> {
    fn start_segment(&mut self, id: &str) -> Result<()> {
        self.inner.start_segment(id)
    }

    fn end_segment(&mut self) -> Result<()> {
        self.inner.end_segment()
    }

    fn start_element(&mut self, contents: &str) -> Result<()> {
        self.elements += 1;
        if self.elements == SUB_ELEMENT_SEPARATOR_ELEMENT {
            self.discovered = contents.chars().next();
        }
        self.inner.start_element(contents)
    }

    fn end_element(&mut self) -> Result<()> {
        self.inner.end_element()
    }

    fn sub_element(&mut self, contents: &str) -> Result<()> {
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
