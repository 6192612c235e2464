use std::io::Read;

use super::{ElementListParser, ParseContext, Parser};
use crate::error::{Error, Expected, InputContext};
use crate::handler::EdiHandler;
use crate::token::{Token, TokenType};
use crate::Result;

/// One segment with no loop semantics: identifier, elements, terminator.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentParser;

impl Parser for SegmentParser {
    type Output = Option<Token>;

    fn matches(&self, token: &Token) -> bool {
        token.is_word()
    }

    fn parse<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<Option<Token>> {
        self.parse_segment(ctx, handler, start)?;
        ctx.next_token()
    }
}

impl SegmentParser {
    /// Parses one complete segment and stops right after its terminator.
    pub fn parse_segment<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<()> {
        self.open(ctx, handler, start)?;
        handler.end_segment()?;
        ctx.location_mut().end_segment();
        Ok(())
    }

    /// Reports `start_segment` and the elements, but leaves the segment open
    /// so loop parsers can report children before `end_segment`.
    pub(crate) fn open<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<()> {
        let Token::Word(id) = start else {
            return Err(Error::unexpected(start, TokenType::Word));
        };
        ctx.begin_segment(&id);
        handler.start_segment(&id)?;

        match ctx.next_token()? {
            Some(token @ Token::ElementSeparator) => {
                ElementListParser.parse(ctx, handler, token)?;
                Ok(())
            }
            Some(Token::SegmentTerminator) => Ok(()),
            Some(token) => Err(Error::unexpected(
                token,
                Expected::OneOf(vec![TokenType::ElementSeparator, TokenType::SegmentTerminator]),
            )),
            None => Err(Error::end_of_input(InputContext::Segment)),
        }
    }
}
