use crate::config::Configuration;
use crate::error::{ErrorKind, Expected, InputContext};
use crate::handler::{Event, render_tree};
use crate::parser::{ElementListParser, ParseContext, Parser, SubElementListParser};
use crate::test_utils::{context, context_with};
use crate::token::{Token, TokenType};
use crate::Result;

fn run(mut ctx: ParseContext<&[u8]>) -> (Result<Token>, Vec<Event>) {
    let mut events: Vec<Event> = Vec::new();
    let start = ctx.next_token().unwrap().unwrap();
    let result = ElementListParser.parse(&mut ctx, &mut events, start);
    (result, events)
}

fn elements(input: &str) -> String {
    let (result, events) = run(context(input));
    assert_eq!(result.unwrap(), Token::SegmentTerminator);
    render_tree(&events)
}

#[test]
fn single_element() {
    insta::assert_snapshot!(elements("*123~"), @r#"Element "123""#);
}

#[test]
fn colon_element_separator() {
    let config = Configuration::builder()
        .element_separator(':')
        .sub_element_separator('|')
        .build()
        .unwrap();
    let (result, events) = run(context_with(":123:234~", config));

    assert_eq!(result.unwrap(), Token::SegmentTerminator);
    insta::assert_snapshot!(render_tree(&events), @r#"
    Element "123"
    Element "234"
    "#);
}

#[test]
fn composite_element() {
    insta::assert_snapshot!(elements("*123|234~"), @r#"
    Element ""
      SubElement "123"
      SubElement "234"
    "#);
}

#[test]
fn composite_between_simple_elements() {
    insta::assert_snapshot!(elements("*A*B|C|D*E~"), @r#"
    Element "A"
    Element ""
      SubElement "B"
      SubElement "C"
      SubElement "D"
    Element "E"
    "#);
}

#[test]
fn blank_elements() {
    insta::assert_snapshot!(elements("*A**B~"), @r#"
    Element "A"
    Element ""
    Element "B"
    "#);
}

#[test]
fn trailing_separator_adds_no_element() {
    insta::assert_snapshot!(elements("*A*~"), @r#"Element "A""#);
}

#[test]
fn missing_terminator() {
    let (result, _) = run(context("*123"));

    assert!(matches!(
        result.unwrap_err().kind(),
        ErrorKind::UnexpectedEndOfInput(InputContext::Element)
    ));
}

#[test]
fn end_of_input_after_separator() {
    let (result, _) = run(context("*A*"));

    assert!(matches!(
        result.unwrap_err().kind(),
        ErrorKind::UnexpectedEndOfInput(InputContext::Segment)
    ));
}

#[test]
fn end_of_input_inside_composite() {
    let (result, events) = run(context("*A|B|"));

    assert!(matches!(
        result.unwrap_err().kind(),
        ErrorKind::UnexpectedEndOfInput(InputContext::SubElement)
    ));
    assert_eq!(
        events.last(),
        Some(&Event::SubElement {
            contents: "B".to_owned()
        })
    );
}

#[test]
fn empty_component_rejected() {
    let (result, _) = run(context("*A||B~"));
    let err = result.unwrap_err();

    let ErrorKind::UnexpectedToken { actual, expected } = err.kind() else {
        panic!("expected unexpected-token error, got {err}");
    };
    assert_eq!(*actual, Token::SubElementSeparator);
    assert_eq!(*expected, Expected::OneOf(vec![TokenType::Word]));
}

#[test]
fn wrong_entry_token() {
    let mut ctx = context("NM1~");
    let start = ctx.next_token().unwrap().unwrap();
    let err = ElementListParser
        .parse(&mut ctx, &mut Vec::<Event>::new(), start)
        .unwrap_err();

    insta::assert_snapshot!(err, @r#"unexpected word "NM1", expected element separator"#);
}

#[test]
fn sub_element_list_returns_terminal_delimiter() {
    let mut ctx = context("|B|C*D~");
    let mut events: Vec<Event> = Vec::new();
    let start = ctx.next_token().unwrap().unwrap();

    let terminal = SubElementListParser
        .parse(&mut ctx, &mut events, start)
        .unwrap();

    assert_eq!(terminal, Token::ElementSeparator);
    assert_eq!(ctx.location().sub_element(), Some(2));
    insta::assert_snapshot!(render_tree(&events), @r#"
    SubElement "B"
    SubElement "C"
    "#);
}

#[test]
fn location_follows_elements() {
    let mut ctx = context("*A*B|C*D|E|F~");
    let start = ctx.next_token().unwrap().unwrap();
    ElementListParser
        .parse(&mut ctx, &mut Vec::<Event>::new(), start)
        .unwrap();

    assert_eq!(ctx.location().element(), 3);
    assert_eq!(ctx.location().sub_element(), None);
}
