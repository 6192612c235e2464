//! Element and sub-element lists.

use std::io::Read;

use super::{ParseContext, Parser};
use crate::error::{Error, Expected, InputContext};
use crate::handler::EdiHandler;
use crate::token::{Token, TokenType};
use crate::Result;

/// Components of one composite element, after its first component.
///
/// Returns the element separator or segment terminator that ended the
/// element; ending the element itself is the caller's job.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubElementListParser;

impl Parser for SubElementListParser {
    type Output = Token;

    fn matches(&self, token: &Token) -> bool {
        *token == Token::SubElementSeparator
    }

    fn parse<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<Token> {
        if !self.matches(&start) {
            return Err(Error::unexpected(start, TokenType::SubElementSeparator));
        }

        loop {
            let token = ctx
                .next_token()?
                .ok_or_else(|| Error::end_of_input(InputContext::SubElement))?;
            let Token::Word(text) = token else {
                return Err(Error::unexpected(token, TokenType::Word));
            };
            ctx.location_mut().next_sub_element();
            handler.sub_element(&text)?;

            match ctx.next_token()? {
                Some(Token::SubElementSeparator) => {}
                Some(token @ (Token::ElementSeparator | Token::SegmentTerminator)) => {
                    return Ok(token);
                }
                Some(token) => {
                    return Err(Error::unexpected(
                        token,
                        Expected::OneOf(vec![
                            TokenType::SubElementSeparator,
                            TokenType::ElementSeparator,
                            TokenType::SegmentTerminator,
                        ]),
                    ));
                }
                None => return Err(Error::end_of_input(InputContext::SubElement)),
            }
        }
    }
}

/// The elements of one segment, from the first element separator through
/// the segment terminator, which it returns.
#[derive(Debug, Clone, Copy, Default)]
pub struct ElementListParser;

impl Parser for ElementListParser {
    type Output = Token;

    fn matches(&self, token: &Token) -> bool {
        *token == Token::ElementSeparator
    }

    fn parse<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<Token> {
        if !self.matches(&start) {
            return Err(Error::unexpected(start, TokenType::ElementSeparator));
        }

        loop {
            let token = ctx
                .next_token()?
                .ok_or_else(|| Error::end_of_input(InputContext::Segment))?;
            match token {
                Token::Word(text) => {
                    ctx.location_mut().next_element();
                    let terminal = self.parse_element(ctx, handler, &text)?;
                    if terminal == Token::SegmentTerminator {
                        return Ok(terminal);
                    }
                }
                Token::ElementSeparator => {
                    // Blank field between two separators.
                    ctx.location_mut().next_element();
                    handler.start_element("")?;
                    handler.end_element()?;
                }
                // Trailing separator before the terminator: no element.
                Token::SegmentTerminator => return Ok(token),
                Token::SubElementSeparator => {
                    return Err(Error::unexpected(
                        token,
                        Expected::OneOf(vec![
                            TokenType::Word,
                            TokenType::ElementSeparator,
                            TokenType::SegmentTerminator,
                        ]),
                    ));
                }
            }
        }
    }
}

impl ElementListParser {
    /// Reports one element whose first word has been read and returns the
    /// delimiter after it.
    fn parse_element<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        text: &str,
    ) -> Result<Token> {
        let next = ctx
            .next_token()?
            .ok_or_else(|| Error::end_of_input(InputContext::Element))?;

        let terminal = match next {
            Token::SubElementSeparator => {
                handler.start_element("")?;
                ctx.location_mut().next_sub_element();
                handler.sub_element(text)?;
                SubElementListParser.parse(ctx, handler, next)?
            }
            Token::ElementSeparator | Token::SegmentTerminator => {
                handler.start_element(text)?;
                next
            }
            Token::Word(_) => {
                return Err(Error::unexpected(
                    next,
                    Expected::OneOf(vec![
                        TokenType::SubElementSeparator,
                        TokenType::ElementSeparator,
                        TokenType::SegmentTerminator,
                    ]),
                ));
            }
        };

        handler.end_element()?;
        ctx.location_mut().clear_sub_element();
        Ok(terminal)
    }
}
