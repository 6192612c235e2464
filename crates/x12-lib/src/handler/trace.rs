use tracing::trace;

use super::EdiHandler;
use crate::Result;

/// Logs every callback at `trace` level, then forwards it.
pub struct TracingHandler<H> {
    inner: H,
}

impl<H: EdiHandler> TracingHandler<H> {
    pub fn new(inner: H) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: EdiHandler> EdiHandler for TracingHandler<H> {
    fn start_segment(&mut self, id: &str) -> Result<()> {
        trace!(id, "start_segment");
        self.inner.start_segment(id)
    }

    fn end_segment(&mut self) -> Result<()> {
        trace!("end_segment");
        self.inner.end_segment()
    }

    fn start_element(&mut self, contents: &str) -> Result<()> {
        trace!(contents, "start_element");
        self.inner.start_element(contents)
    }

    fn end_element(&mut self) -> Result<()> {
        trace!("end_element");
        self.inner.end_element()
    }

    fn sub_element(&mut self, contents: &str) -> Result<()> {
        trace!(contents, "sub_element");
        self.inner.sub_element(contents)
    }

    fn start_loop(&mut self, id: &str) -> Result<()> {
        trace!(id, "start_loop");
        self.inner.start_loop(id)
    }

    fn end_loop(&mut self) -> Result<()> {
        trace!("end_loop");
        self.inner.end_loop()
    }

    fn end_document(&mut self) -> Result<()> {
        trace!("end_document");
        self.inner.end_document()
    }
}
