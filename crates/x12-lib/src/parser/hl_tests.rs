use crate::error::{ErrorKind, InputContext};
use crate::handler::{Event, HlInfo, render_tree};
use crate::parser::{HlLoopParser, Parser};
use crate::test_utils::{context, parse_events, parse_tree};
use crate::token::Token;

fn parse_level(input: &str) -> (Option<Token>, HlInfo, Vec<Event>) {
    let mut ctx = context(input);
    let mut events: Vec<Event> = Vec::new();
    let start = ctx.next_token().unwrap().unwrap();
    let (next, info) = HlLoopParser
        .parse_with_info(&mut ctx, &mut events, start)
        .unwrap();
    (next, info, events)
}

#[test]
fn level_with_one_child() {
    let (next, info, events) = parse_level("HL*1**20*1~NM1*PR*2*PAYER~");

    assert_eq!(next, None);
    assert_eq!(
        info,
        HlInfo {
            this_level: 1,
            parent_level: None,
            code: 20,
            has_child_node: true,
        }
    );
    insta::assert_snapshot!(render_tree(&events), @r#"
    Loop HL
      Segment HL
        Element "1"
        Element ""
        Element "20"
        Element "1"
        Loop NM1
          Segment NM1
            Element "PR"
            Element "2"
            Element "PAYER"
    "#);
}

#[test]
fn trace_segments_precede_the_child() {
    let input = "HL*3*2*22*0~TRN*1*93175-012547*9877281234~TRN*1*X~NM1*IL*1*DOE~SE*1~";
    let (next, info, events) = parse_level(input);

    assert_eq!(next, Some(Token::word("SE")));
    assert_eq!(info.parent_level, Some(2));
    assert!(!info.has_child_node);
    insta::assert_snapshot!(render_tree(&events), @r#"
    Loop HL
      Segment HL
        Element "3"
        Element "2"
        Element "22"
        Element "0"
        Segment TRN
          Element "1"
          Element "93175-012547"
          Element "9877281234"
        Segment TRN
          Element "1"
          Element "X"
        Loop NM1
          Segment NM1
            Element "IL"
            Element "1"
            Element "DOE"
    "#);
}

#[test]
fn level_without_child_element() {
    let (next, info, events) = parse_level("HL*1**20~SE~");

    assert_eq!(next, Some(Token::word("SE")));
    assert!(!info.has_child_node);
    insta::assert_snapshot!(render_tree(&events), @r#"
    Loop HL
      Segment HL
        Element "1"
        Element ""
        Element "20"
    "#);
}

#[test]
fn nested_levels_through_name_loops() {
    let input = "HL*1**20*1~NM1*PR*2*ACME~HL*2*1*21*1~NM1*1P*2*CLINIC~SE*1~";

    insta::assert_snapshot!(parse_tree(input), @r#"
    Loop HL
      Segment HL
        Element "1"
        Element ""
        Element "20"
        Element "1"
        Loop NM1
          Segment NM1
            Element "PR"
            Element "2"
            Element "ACME"
            Loop HL
              Segment HL
                Element "2"
                Element "1"
                Element "21"
                Element "1"
                Loop NM1
                  Segment NM1
                    Element "1P"
                    Element "2"
                    Element "CLINIC"
    Segment SE
      Element "1"
    "#);
}

#[test]
fn end_of_input_before_child() {
    let err = parse_events("HL*1**20*1~").unwrap_err();

    assert!(matches!(
        err.kind(),
        ErrorKind::UnexpectedEndOfInput(InputContext::Loop)
    ));
}

#[test]
fn end_of_input_between_trace_and_child() {
    let err = parse_events("HL*3*2*22*0~TRN*1*X~").unwrap_err();

    assert!(matches!(
        err.kind(),
        ErrorKind::UnexpectedEndOfInput(InputContext::Loop)
    ));
}

#[test]
fn malformed_level_number() {
    let err = parse_events("HL*A**20*1~NM1*PR~").unwrap_err();

    insta::assert_snapshot!(err, @r#"malformed HL01 value "A""#);
}

#[test]
fn wrong_entry_token() {
    let mut ctx = context("NM1*PR~");
    let start = ctx.next_token().unwrap().unwrap();

    let err = HlLoopParser
        .parse(&mut ctx, &mut Vec::<Event>::new(), start)
        .unwrap_err();

    insta::assert_snapshot!(err, @r#"unexpected word "NM1", expected word "HL""#);
}

#[test]
fn sibling_levels_nest_on_the_frame_stack() {
    let mut input = String::from("HL*1**20*1~NM1*PR*2*ACME~");
    for n in 2..=5_000 {
        input.push_str(&format!("HL*{n}*1*22*0~NM1*IL*1*DOE~"));
    }
    input.push_str("SE*1~");
    let mut ctx = context(&input);
    let mut events: Vec<Event> = Vec::new();
    let start = ctx.next_token().unwrap().unwrap();

    let (next, info) = HlLoopParser
        .parse_with_info(&mut ctx, &mut events, start)
        .unwrap();

    assert_eq!(next, Some(Token::word("SE")));
    assert_eq!(info.this_level, 1);
    assert_eq!(ctx.depth(), 0);
    assert_eq!(ctx.segments(), 10_000);
    let loops = events
        .iter()
        .filter(|e| matches!(e, Event::StartLoop { .. }))
        .count();
    assert_eq!(loops, 10_000);
}

#[test]
fn recursion_limit_counts_open_levels() {
    let mut input = String::from("HL*1**20*1~NM1*PR*2*ACME~");
    for n in 2..=20 {
        input.push_str(&format!("HL*{n}*1*22*0~NM1*IL*1*DOE~"));
    }
    let mut ctx = context(&input).with_recursion_limit(Some(10));
    let start = ctx.next_token().unwrap().unwrap();

    let err = HlLoopParser
        .parse(&mut ctx, &mut Vec::<Event>::new(), start)
        .unwrap_err();

    assert!(matches!(err.kind(), ErrorKind::RecursionLimitExceeded));
    assert_eq!(ctx.depth(), 10);
}
