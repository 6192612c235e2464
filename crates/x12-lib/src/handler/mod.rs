//! The event protocol shared by parsing and serialization.
//!
//! Parsers drive an [`EdiHandler`]; [`crate::EdiWriter`] is an `EdiHandler`
//! that turns the same calls back into delimited text. Ordering contract:
//! - every `start_segment` is matched by one `end_segment`
//! - `start_element`/`end_element` pairs sit inside a segment, never nested
//! - `sub_element` only occurs between `start_element` and `end_element`
//! - `start_loop`/`end_loop` wrap one or more segments and may nest
//!
//! Loop parsers report a loop's child segments before the owning segment's
//! `end_segment`, so segments nest inside segments as well.

mod event;
mod hl;
mod isa;
mod trace;


pub use event::{Event, render_tree, replay};
pub use hl::{HlCapture, HlInfo};
pub use isa::IsaHandler;
pub use trace::TracingHandler;

use crate::Result;

pub trait EdiHandler {
    fn start_segment(&mut self, id: &str) -> Result<()>;
    fn end_segment(&mut self) -> Result<()>;

    /// `contents` is empty for a blank element and for a composite one, whose
    /// components follow as `sub_element` calls.
    fn start_element(&mut self, contents: &str) -> Result<()>;
    fn end_element(&mut self) -> Result<()>;
    fn sub_element(&mut self, contents: &str) -> Result<()>;

    fn start_loop(&mut self, id: &str) -> Result<()>;
    fn end_loop(&mut self) -> Result<()>;

    /// Called once after the last segment of a document.
    fn end_document(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<H: EdiHandler + ?Sized> EdiHandler for &mut H {
    fn start_segment(&mut self, id: &str) -> Result<()> {
        (**self).start_segment(id)
    }

    fn end_segment(&mut self) -> Result<()> {
        (**self).end_segment()
    }

    fn start_element(&mut self, contents: &str) -> Result<()> {
        (**self).start_element(contents)
    }

    fn end_element(&mut self) -> Result<()> {
        (**self).end_element()
    }

    fn sub_element(&mut self, contents: &str) -> Result<()> {
        (**self).sub_element(contents)
    }

    fn start_loop(&mut self, id: &str) -> Result<()> {
        (**self).start_loop(id)
    }

    fn end_loop(&mut self) -> Result<()> {
        (**self).end_loop()
    }

    fn end_document(&mut self) -> Result<()> {
        (**self).end_document()
    }
}
