//! Document driver.
//!
//! Parses the interchange header first, with the sub-element separator still
//! unassigned, and locks the separator announced in ISA16 before any further
//! character is classified. The remaining segments go through
//! [`SegmentListParser`].

use std::io::Read;
use std::sync::Arc;

use tracing::debug;

use crate::config::{Configuration, Delimiters};
use crate::error::{Error, Expected};
use crate::handler::{EdiHandler, IsaHandler};
use crate::loops::LoopTable;
use crate::parser::{
    ParseContext, Parser, SegmentListParser, SegmentParser, SegmentParserFactory,
};
use crate::token::Token;
use crate::tokenizer::Tokenizer;
use crate::Result;

const INTERCHANGE_HEADER: &str = "ISA";

/// Outcome of a successful parse.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseSummary {
    /// Segments started, nested ones included.
    pub segments: usize,
    /// Final delimiters, with the sub-element separator assigned.
    pub configuration: Configuration,
}

#[derive(Debug, Clone)]
pub struct EdiReader {
    delimiters: Delimiters,
    wrap_errors: bool,
    require_interchange: bool,
    ignore_line_breaks: bool,
    recursion_limit: Option<u32>,
    loop_table: Arc<LoopTable>,
}

impl Default for EdiReader {
    fn default() -> Self {
        Self::new()
    }
}

impl EdiReader {
    pub fn new() -> Self {
        Self {
            delimiters: Delimiters::default(),
            wrap_errors: true,
            require_interchange: true,
            ignore_line_breaks: false,
            recursion_limit: None,
            loop_table: LoopTable::eligibility(),
        }
    }

    /// Segment terminator and element separator to parse with. The
    /// sub-element separator is only used when ISA16 does not provide one.
    pub fn delimiters(mut self, delimiters: Delimiters) -> Self {
        self.delimiters = delimiters;
        self
    }

    /// Attach the failure location to parse errors.
    pub fn wrap_errors(mut self, wrap: bool) -> Self {
        self.wrap_errors = wrap;
        self
    }

    /// Reject documents that do not start with `ISA`.
    pub fn require_interchange(mut self, require: bool) -> Self {
        self.require_interchange = require;
        self
    }

    pub fn ignore_line_breaks(mut self, ignore: bool) -> Self {
        self.ignore_line_breaks = ignore;
        self
    }

    /// Fail once more than `limit` loops are open at once. Unbounded by
    /// default.
    pub fn recursion_limit(mut self, limit: Option<u32>) -> Self {
        self.recursion_limit = limit;
        self
    }

    pub fn loop_table(mut self, table: Arc<LoopTable>) -> Self {
        self.loop_table = table;
        self
    }

    pub fn parse_str(&self, input: &str, handler: &mut dyn EdiHandler) -> Result<ParseSummary> {
        self.parse(input.as_bytes(), handler)
    }

    pub fn parse<R: Read>(&self, input: R, handler: &mut dyn EdiHandler) -> Result<ParseSummary> {
        let config = Configuration::builder()
            .delimiters(self.delimiters)
            .build()?;
        let tokenizer = Tokenizer::new(input, config).ignore_line_breaks(self.ignore_line_breaks);
        let factory = SegmentParserFactory::new(Arc::clone(&self.loop_table));
        let mut ctx =
            ParseContext::new(tokenizer, factory).with_recursion_limit(self.recursion_limit);

        match self.parse_document(&mut ctx, handler) {
            Ok(()) => {
                let segments = ctx.segments();
                let (configuration, _) = ctx.into_parts();
                Ok(ParseSummary {
                    segments,
                    configuration,
                })
            }
            Err(err) if self.wrap_errors => Err(err.with_location(ctx.location().clone())),
            Err(err) => Err(err),
        }
    }

    fn parse_document<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
    ) -> Result<()> {
        let Some(first) = ctx.next_token()? else {
            return handler.end_document();
        };

        let next = if first.is_word_eq(INTERCHANGE_HEADER) {
            let mut isa = IsaHandler::new(&mut *handler);
            SegmentParser.parse_segment(ctx, &mut isa, first)?;
            let discovered = isa.discovered();
            self.assign_sub_element_separator(ctx.config_mut(), discovered)?;
            ctx.next_token()?
        } else if self.require_interchange {
            return Err(Error::unexpected(
                first,
                Expected::Exact(Token::word(INTERCHANGE_HEADER)),
            ));
        } else {
            self.assign_sub_element_separator(ctx.config_mut(), None)?;
            Some(first)
        };

        if let Some(token) = next {
            SegmentListParser.parse(ctx, handler, token)?;
        }
        handler.end_document()
    }

    fn assign_sub_element_separator(
        &self,
        config: &mut Configuration,
        discovered: Option<char>,
    ) -> Result<()> {
        let separator = match discovered {
            Some(separator) => {
                debug!(?separator, "sub-element separator discovered in ISA16");
                separator
            }
            None => {
                let separator = self.delimiters.sub_element_separator;
                debug!(?separator, "no ISA16, using configured sub-element separator");
                separator
            }
        };
        config.set_sub_element_separator(separator)?;
        Ok(())
    }
}
