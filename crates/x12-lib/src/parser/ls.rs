use std::io::Read;

use tracing::debug;

use super::frame::{drive, Frame};
use super::{ParseContext, Parser, SegmentParser};
use crate::error::{Error, Expected};
use crate::handler::EdiHandler;
use crate::token::Token;
use crate::Result;

/// An explicit `LS ... LE` loop. The closing `LE` is reported inside it.
#[derive(Debug, Clone, Copy, Default)]
pub struct LsLoopParser;

impl LsLoopParser {
    pub const ID: &'static str = "LS";
    pub const CLOSE: &'static str = "LE";

    pub(crate) fn open<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<(Frame, Option<Token>)> {
        if !self.matches(&start) {
            return Err(Error::unexpected(start, Expected::Exact(Token::word(Self::ID))));
        }

        ctx.enter()?;
        debug!(depth = ctx.depth(), "bracketed loop opened");
        handler.start_loop(Self::ID)?;
        SegmentParser.open(ctx, handler, start)?;

        Ok((Frame::Ls { done: false }, ctx.next_token()?))
    }
}

impl Parser for LsLoopParser {
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
        let (frame, next) = self.open(ctx, handler, start)?;
        drive(ctx, handler, frame, next)
    }
}
