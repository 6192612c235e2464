use std::sync::Arc;

use crate::loops::LoopTable;
use crate::parser::{Parser, SegmentParserFactory, SegmentStrategy};
use crate::token::Token;

#[test]
fn structural_segments() {
    let factory = SegmentParserFactory::default();

    assert!(matches!(factory.strategy_for("HL"), SegmentStrategy::Hl(_)));
    assert!(matches!(factory.strategy_for("LS"), SegmentStrategy::Ls(_)));
}

#[test]
fn allow_list_triggers() {
    let factory = SegmentParserFactory::default();

    for trigger in ["EB", "NM1", "EQ"] {
        let SegmentStrategy::Loop(parser) = factory.strategy_for(trigger) else {
            panic!("{trigger} should open a loop");
        };
        assert_eq!(parser.trigger(), trigger);
    }
}

#[test]
fn everything_else_is_plain() {
    let factory = SegmentParserFactory::default();

    for id in ["ISA", "GS", "ST", "BHT", "TRN", "DTP", "LE", "SE"] {
        assert!(
            matches!(factory.strategy_for(id), SegmentStrategy::Plain(_)),
            "{id} should be a plain segment"
        );
    }
}

#[test]
fn table_decides_loops() {
    let table = LoopTable::new("test").with_loop("LX", ["SV1"]);
    let factory = SegmentParserFactory::new(Arc::new(table));

    assert!(matches!(factory.strategy_for("LX"), SegmentStrategy::Loop(_)));
    assert!(matches!(factory.strategy_for("EB"), SegmentStrategy::Plain(_)));
    assert!(matches!(factory.strategy_for("HL"), SegmentStrategy::Hl(_)));
}

#[test]
fn strategies_match_their_identifier() {
    let factory = SegmentParserFactory::default();

    assert!(factory.strategy_for("HL").matches(&Token::word("HL")));
    assert!(!factory.strategy_for("LS").matches(&Token::word("LE")));
    assert!(factory.strategy_for("EQ").matches(&Token::word("EQ")));
    assert!(factory.strategy_for("REF").matches(&Token::word("REF")));
    assert!(!factory.strategy_for("REF").matches(&Token::SegmentTerminator));
}
