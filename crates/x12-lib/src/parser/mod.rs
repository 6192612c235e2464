//! Recursive-descent parsers over the token stream.
//!
//! # Architecture
//!
//! Every parser is a small value implementing [`Parser`]: it is handed the
//! token that selected it and pulls the rest from a shared [`ParseContext`],
//! reporting structure to an [`EdiHandler`]. Element-level parsers return the
//! delimiter they stopped at. Segment-level parsers consume through their
//! terminator and return the token that follows (`None` at end of input), so
//! a loop can hand back the identifier that closed it.
//!
//! Loops nest as deep as the data does, so open loops live on an explicit
//! frame stack rather than the call stack. Nesting depth is unbounded unless
//! a recursion limit is set.
//!
//! Which segment-level parser handles an identifier is decided only by
//! [`SegmentParserFactory`].

mod elements;
mod factory;
mod frame;
mod hl;
mod list;
mod loops;
mod ls;
mod segment;

#[cfg(test)]
mod elements_tests;
#[cfg(test)]
mod factory_tests;
#[cfg(test)]
mod hl_tests;

pub use elements::{ElementListParser, SubElementListParser};
pub use factory::{SegmentParserFactory, SegmentStrategy};
pub use hl::HlLoopParser;
pub use list::SegmentListParser;
pub use loops::LoopParser;
pub use ls::LsLoopParser;
pub use segment::SegmentParser;

use std::io::Read;

use tracing::trace;

use crate::config::Configuration;
use crate::error::{Error, ErrorKind};
use crate::handler::EdiHandler;
use crate::location::Location;
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::Result;

pub trait Parser {
    type Output;

    /// Whether `token` can start this construct.
    fn matches(&self, token: &Token) -> bool;

    fn parse<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<Self::Output>;
}

/// Per-document parse state: tokenizer, dispatch table and nesting depth.
pub struct ParseContext<R> {
    tokenizer: Tokenizer<R>,
    factory: SegmentParserFactory,
    depth: u32,
    recursion_limit: Option<u32>,
    segments: usize,
}

impl<R: Read> ParseContext<R> {
    pub fn new(tokenizer: Tokenizer<R>, factory: SegmentParserFactory) -> Self {
        Self {
            tokenizer,
            factory,
            depth: 0,
            recursion_limit: None,
            segments: 0,
        }
    }

    /// Caps how many loops may be open at once; `None` leaves nesting
    /// unbounded.
    pub fn with_recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn next_token(&mut self) -> Result<Option<Token>> {
        self.tokenizer.next_token()
    }

    pub fn factory(&self) -> &SegmentParserFactory {
        &self.factory
    }

    pub fn config(&self) -> &Configuration {
        self.tokenizer.config()
    }

    pub fn config_mut(&mut self) -> &mut Configuration {
        self.tokenizer.config_mut()
    }

    pub fn location(&self) -> &Location {
        self.tokenizer.location()
    }

    pub fn location_mut(&mut self) -> &mut Location {
        self.tokenizer.location_mut()
    }

    /// Number of segments started so far.
    pub fn segments(&self) -> usize {
        self.segments
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn into_parts(self) -> (Configuration, Location) {
        self.tokenizer.into_parts()
    }

    pub(crate) fn begin_segment(&mut self, id: &str) {
        self.segments += 1;
        let location = self.tokenizer.location_mut();
        location.start_segment(id);
        trace!(
            segment = id,
            line = location.line(),
            column = location.column(),
            "segment"
        );
    }

    pub(crate) fn enter(&mut self) -> Result<()> {
        if let Some(limit) = self.recursion_limit
            && self.depth >= limit
        {
            return Err(Error::new(ErrorKind::RecursionLimitExceeded));
        }
        self.depth += 1;
        Ok(())
    }

    pub(crate) fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }
}
