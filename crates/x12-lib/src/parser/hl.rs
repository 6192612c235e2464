use std::io::Read;

use tracing::debug;

use super::frame::{drive, Frame};
use super::{ParseContext, Parser, SegmentParser};
use crate::error::{Error, Expected};
use crate::handler::{EdiHandler, HlCapture, HlInfo};
use crate::token::Token;
use crate::Result;

/// HL04: present when the level is followed by a child segment.
const HAS_CHILD_ELEMENT: usize = 4;

/// One hierarchical level: the `HL` segment and its single child segment.
///
/// The hierarchy itself is carried by the level numbers in the data; the
/// loop returns after one child and leaves sibling or nested `HL` segments to
/// whoever called it. Any number of `TRN` segments may sit between the `HL`
/// and that child.
#[derive(Debug, Clone, Copy, Default)]
pub struct HlLoopParser;

impl HlLoopParser {
    pub const ID: &'static str = "HL";

    /// Like [`Parser::parse`], also returning the decoded HL01..HL04.
    pub fn parse_with_info<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<(Option<Token>, HlInfo)> {
        let (frame, next, info) = self.open(ctx, handler, start)?;
        let next = drive(ctx, handler, frame, next)?;
        Ok((next, info))
    }

    /// Starts the loop and the `HL` segment. A level without HL04 is already
    /// complete; otherwise the frame waits for its child.
    pub(crate) fn open<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<(Frame, Option<Token>, HlInfo)> {
        if !self.matches(&start) {
            return Err(Error::unexpected(start, Expected::Exact(Token::word(Self::ID))));
        }

        ctx.enter()?;
        handler.start_loop(Self::ID)?;

        let mut capture = HlCapture::new(&mut *handler);
        SegmentParser.open(ctx, &mut capture, start)?;
        let elements = capture.into_elements();
        let info = HlInfo::from_elements(&elements)?;
        debug!(
            level = info.this_level,
            parent = ?info.parent_level,
            code = info.code,
            "hierarchical level"
        );

        let frame = Frame::Hl {
            done: elements.len() < HAS_CHILD_ELEMENT,
        };
        Ok((frame, ctx.next_token()?, info))
    }
}

impl Parser for HlLoopParser {
    type Output = Option<Token>;

    fn matches(&self, token: &Token) -> bool {
        token.is_word_eq(Self::ID)
    }

    fn parse<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<Option<Token>> {
        self.parse_with_info(ctx, handler, start)
            .map(|(next, _)| next)
    }
}
