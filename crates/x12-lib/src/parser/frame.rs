//! Explicit stack of open loops.
//!
//! Structural parsers nest through the data (`NM1` admits `HL`, whose child
//! is another `NM1`), so nesting depth grows with the number of levels in a
//! document. Open loops are kept as [`Frame`]s on a heap stack instead of
//! native call frames; a child that opens another loop pushes a frame and the
//! parent resumes with whatever token the child hands back.

use std::io::Read;

use tracing::debug;

use super::{LoopParser, LsLoopParser, ParseContext, Parser, SegmentParser, SegmentStrategy};
use crate::error::{Error, InputContext};
use crate::handler::EdiHandler;
use crate::token::{Token, TokenType};
use crate::Result;

/// Segment that may repeat between an `HL` and its child.
const TRACE_SEGMENT: &str = "TRN";

/// One open loop whose owning segment has been started but not ended.
#[derive(Debug)]
pub(crate) enum Frame {
    /// Allow-list loop. `fresh` right after a trigger instance opened, where
    /// end of input still closes the loop cleanly.
    Loop { parser: LoopParser, fresh: bool },
    /// Hierarchical level; `done` once its one child has been parsed.
    Hl { done: bool },
    /// `LS` loop; `done` once `LE` has been parsed.
    Ls { done: bool },
}

enum Step {
    /// Step the same frame again with this token.
    Again(Option<Token>),
    /// Parse this identifier as a child, then step the frame with the result.
    Child(Token),
    /// The frame is closed; hand this token to the parent.
    Done(Option<Token>),
}

impl Frame {
    fn step<R: Read>(
        &mut self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        input: Option<Token>,
    ) -> Result<Step> {
        match self {
            Frame::Loop { parser, fresh } => step_loop(parser, fresh, ctx, handler, input),
            Frame::Hl { done: true } => {
                close(ctx, handler)?;
                Ok(Step::Done(input))
            }
            Frame::Ls { done: true } => {
                close(ctx, handler)?;
                debug!("bracketed loop closed");
                Ok(Step::Done(input))
            }
            Frame::Hl { done } => {
                let token = expect_word(input)?;
                if token.is_word_eq(TRACE_SEGMENT) {
                    SegmentParser.parse_segment(ctx, handler, token)?;
                    return Ok(Step::Again(ctx.next_token()?));
                }
                *done = true;
                Ok(Step::Child(token))
            }
            Frame::Ls { done } => {
                let token = expect_word(input)?;
                *done = token.is_word_eq(LsLoopParser::CLOSE);
                Ok(Step::Child(token))
            }
        }
    }
}

fn step_loop<R: Read>(
    parser: &LoopParser,
    fresh: &mut bool,
    ctx: &mut ParseContext<R>,
    handler: &mut dyn EdiHandler,
    input: Option<Token>,
) -> Result<Step> {
    let token = match input {
        None if *fresh => {
            close(ctx, handler)?;
            debug!(trigger = parser.trigger(), "loop closed");
            return Ok(Step::Done(None));
        }
        input => expect_word(input)?,
    };

    if parser.matches(&token) {
        handler.end_segment()?;
        ctx.location_mut().end_segment();
        SegmentParser.open(ctx, handler, token)?;
        *fresh = true;
        return Ok(Step::Again(ctx.next_token()?));
    }

    if !parser.admits(&token) {
        close(ctx, handler)?;
        debug!(trigger = parser.trigger(), "loop closed");
        return Ok(Step::Done(Some(token)));
    }

    *fresh = false;
    Ok(Step::Child(token))
}

/// Ends the owning segment and the loop around it.
fn close<R: Read>(ctx: &mut ParseContext<R>, handler: &mut dyn EdiHandler) -> Result<()> {
    handler.end_segment()?;
    ctx.location_mut().end_segment();
    handler.end_loop()
}

/// Inside a loop, end of input and stray delimiters are both failures.
fn expect_word(input: Option<Token>) -> Result<Token> {
    match input {
        Some(token @ Token::Word(_)) => Ok(token),
        Some(token) => Err(Error::unexpected(token, TokenType::Word)),
        None => Err(Error::end_of_input(InputContext::Loop)),
    }
}

/// Runs `root`, already opened, until it closes, and returns the token that
/// follows it.
pub(crate) fn drive<R: Read>(
    ctx: &mut ParseContext<R>,
    handler: &mut dyn EdiHandler,
    root: Frame,
    input: Option<Token>,
) -> Result<Option<Token>> {
    let mut stack = vec![root];
    let mut input = input;

    while let Some(top) = stack.last_mut() {
        match top.step(ctx, handler, input)? {
            Step::Again(next) => input = next,
            Step::Done(next) => {
                stack.pop();
                ctx.leave();
                input = next;
            }
            Step::Child(token) => {
                let strategy = match token.as_word() {
                    Some(id) => ctx.factory().strategy_for(id),
                    None => return Err(Error::unexpected(token, TokenType::Word)),
                };
                input = match strategy {
                    SegmentStrategy::Plain(parser) => parser.parse(ctx, handler, token)?,
                    SegmentStrategy::Loop(parser) => {
                        let (frame, next) = parser.open(ctx, handler, token)?;
                        stack.push(frame);
                        next
                    }
                    SegmentStrategy::Hl(parser) => {
                        let (frame, next, _) = parser.open(ctx, handler, token)?;
                        stack.push(frame);
                        next
                    }
                    SegmentStrategy::Ls(parser) => {
                        let (frame, next) = parser.open(ctx, handler, token)?;
                        stack.push(frame);
                        next
                    }
                };
            }
        }
    }

    Ok(input)
}
