use std::io::Read;
use std::sync::Arc;

use super::{HlLoopParser, LoopParser, LsLoopParser, ParseContext, Parser, SegmentParser};
use crate::handler::EdiHandler;
use crate::loops::LoopTable;
use crate::token::Token;
use crate::Result;

/// The segment-level parser chosen for one identifier.
#[derive(Debug, Clone)]
pub enum SegmentStrategy {
    Plain(SegmentParser),
    Hl(HlLoopParser),
    Ls(LsLoopParser),
    Loop(LoopParser),
}

impl Parser for SegmentStrategy {
    type Output = Option<Token>;

    fn matches(&self, token: &Token) -> bool {
        match self {
            SegmentStrategy::Plain(parser) => parser.matches(token),
            SegmentStrategy::Hl(parser) => parser.matches(token),
            SegmentStrategy::Ls(parser) => parser.matches(token),
            SegmentStrategy::Loop(parser) => parser.matches(token),
        }
    }

    fn parse<R: Read>(
        &self,
        ctx: &mut ParseContext<R>,
        handler: &mut dyn EdiHandler,
        start: Token,
    ) -> Result<Option<Token>> {
        match self {
            SegmentStrategy::Plain(parser) => parser.parse(ctx, handler, start),
            SegmentStrategy::Hl(parser) => parser.parse(ctx, handler, start),
            SegmentStrategy::Ls(parser) => parser.parse(ctx, handler, start),
            SegmentStrategy::Loop(parser) => parser.parse(ctx, handler, start),
        }
    }
}

/// Maps segment identifiers to parsing strategies.
///
/// `HL` and `LS` are structural; triggers in the loop table get an
/// allow-list loop; everything else is a plain segment.
#[derive(Debug, Clone)]
pub struct SegmentParserFactory {
    loops: Arc<LoopTable>,
}

impl Default for SegmentParserFactory {
    fn default() -> Self {
        Self::new(LoopTable::eligibility())
    }
}

impl SegmentParserFactory {
    pub fn new(loops: Arc<LoopTable>) -> Self {
        Self { loops }
    }

    pub fn loop_table(&self) -> &LoopTable {
        &self.loops
    }

    pub fn strategy_for(&self, id: &str) -> SegmentStrategy {
        match id {
            HlLoopParser::ID => SegmentStrategy::Hl(HlLoopParser),
            LsLoopParser::ID => SegmentStrategy::Ls(LsLoopParser),
            _ if self.loops.is_trigger(id) => {
                SegmentStrategy::Loop(LoopParser::new(id, Arc::clone(&self.loops)))
            }
            _ => SegmentStrategy::Plain(SegmentParser),
        }
    }
}
