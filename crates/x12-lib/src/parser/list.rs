use std::io::Read;

use super::{ParseContext, Parser};
use crate::error::Error;
use crate::handler::EdiHandler;
use crate::token::{Token, TokenType};
use crate::Result;

/// Top-level run of segments until end of input.
#[derive(Debug, Clone, Copy, Default)]
pub struct SegmentListParser;

impl Parser for SegmentListParser {
    type Output = ();

    fn matches(&self, token: &Token) -> bool {
        token.is_word()
    }

    fn parse<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<()> {
        let mut next = Some(start);
        while let Some(token) = next {
            let Some(id) = token.as_word() else {
                return Err(Error::unexpected(token, TokenType::Word));
            };
            let strategy = ctx.factory().strategy_for(id);
            next = strategy.parse(ctx, handler, token)?;
        }
        Ok(())
    }
}
