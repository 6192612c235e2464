use std::io::Read;
use std::sync::Arc;

use tracing::debug;

use super::frame::{drive, Frame};
use super::{ParseContext, Parser, SegmentParser};
use crate::error::{Error, Expected};
use crate::handler::EdiHandler;
use crate::loops::LoopTable;
use crate::token::Token;
use crate::Result;

/// A loop with no closing segment, bounded by an allow-list.
///
/// Each instance of the trigger segment stays open while the identifiers
/// that follow it are in the trigger's allow-list; those are parsed as its
/// children. Another trigger starts the next instance. Anything else closes
/// the loop and is handed back unconsumed.
#[derive(Debug, Clone)]
pub struct LoopParser {
    trigger: String,
    table: Arc<LoopTable>,
}

impl LoopParser {
    pub fn new(trigger: impl Into<String>, table: Arc<LoopTable>) -> Self {
        Self {
            trigger: trigger.into(),
            table,
        }
    }

    pub fn trigger(&self) -> &str {
        &self.trigger
    }

    /// Whether `token` may follow the trigger inside this loop.
    pub(crate) fn admits(&self, token: &Token) -> bool {
        token
            .as_word()
            .is_some_and(|id| self.table.is_member(&self.trigger, id))
    }

    /// Starts the loop and its first trigger instance, returning the open
    /// frame and the token after the trigger segment.
    pub(crate) fn open<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<(Frame, Option<Token>)> {
        if !self.matches(&start) {
            return Err(Error::unexpected(
                start,
                Expected::Exact(Token::word(self.trigger.as_str())),
            ));
        }

        ctx.enter()?;
        debug!(trigger = %self.trigger, depth = ctx.depth(), "loop opened");
        handler.start_loop(&self.trigger)?;
        SegmentParser.open(ctx, handler, start)?;

        let frame = Frame::Loop {
            parser: self.clone(),
            fresh: true,
        };
        Ok((frame, ctx.next_token()?))
    }
}

impl Parser for LoopParser {
    type Output = Option<Token>;

    fn matches(&self, token: &Token) -> bool {
        token.is_word_eq(&self.trigger)
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
