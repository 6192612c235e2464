use crate::config::Configuration;
use crate::error::ErrorKind;
use crate::test_utils::{config, dump_tokens};
use crate::token::Token;
use crate::tokenizer::Tokenizer;

fn colon_config() -> Configuration {
    Configuration::builder()
        .segment_terminator('~')
        .element_separator(':')
        .sub_element_separator('|')
        .build()
        .unwrap()
}

#[test]
fn single_delimiters() {
    for (input, expected) in [
        ("~", Token::SegmentTerminator),
        (":", Token::ElementSeparator),
        ("|", Token::SubElementSeparator),
    ] {
        let mut tokenizer = Tokenizer::new(input.as_bytes(), colon_config());
        assert_eq!(tokenizer.next_token().unwrap(), Some(expected));
        assert_eq!(tokenizer.next_token().unwrap(), None);
    }
}

#[test]
fn word_at_end_of_input() {
    let mut tokenizer = Tokenizer::new("abc".as_bytes(), colon_config());

    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::word("abc")));
    assert_eq!(tokenizer.next_token().unwrap(), None);
}

#[test]
fn word_then_separator_uses_lookahead() {
    insta::assert_snapshot!(dump_tokens("abc:def|ghi~", colon_config()), @r#"
    Word("abc")
    ElementSeparator
    Word("def")
    SubElementSeparator
    Word("ghi")
    SegmentTerminator
    "#);
}

#[test]
fn blank_interchange_fields_are_back_to_back_separators() {
    let input = format!("ISA{}~", ":".repeat(15));
    let tokens: Vec<Token> = Tokenizer::new(input.as_bytes(), colon_config())
        .map(Result::unwrap)
        .collect();

    assert_eq!(tokens.len(), 17);
    assert_eq!(tokens[0], Token::word("ISA"));
    assert!(tokens[1..16].iter().all(|t| *t == Token::ElementSeparator));
    assert_eq!(tokens[16], Token::SegmentTerminator);
}

#[test]
fn unassigned_sub_element_separator_is_text() {
    let config = Configuration::default();

    insta::assert_snapshot!(dump_tokens("NM1*A:B|C~", config), @r#"
    Word("NM1")
    ElementSeparator
    Word("A:B|C")
    SegmentTerminator
    "#);
}

#[test]
fn separator_assigned_mid_stream_applies_to_following_input() {
    let mut tokenizer = Tokenizer::new("A:B~C:D~".as_bytes(), Configuration::default());

    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::word("A:B")));
    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::SegmentTerminator));

    tokenizer.config_mut().set_sub_element_separator(':').unwrap();

    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::word("C")));
    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::SubElementSeparator));
    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::word("D")));
}

#[test]
fn trailing_whitespace_is_not_a_word() {
    let mut tokenizer = Tokenizer::new("A~\n  ".as_bytes(), config());

    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::word("A")));
    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::SegmentTerminator));
    assert_eq!(tokenizer.next_token().unwrap(), None);
}

#[test]
fn line_breaks_kept_by_default() {
    insta::assert_snapshot!(dump_tokens("A~\nB~", config()), @r#"
    Word("A")
    SegmentTerminator
    Word("\nB")
    SegmentTerminator
    "#);
}

#[test]
fn line_breaks_ignored_when_requested() {
    let tokens: Vec<Token> = Tokenizer::new("A~\r\nB*C\n~".as_bytes(), config())
        .ignore_line_breaks(true)
        .map(Result::unwrap)
        .collect();

    assert_eq!(
        tokens,
        vec![
            Token::word("A"),
            Token::SegmentTerminator,
            Token::word("B"),
            Token::ElementSeparator,
            Token::word("C"),
            Token::SegmentTerminator,
        ]
    );
}

#[test]
fn location_tracks_lines_and_offsets() {
    let mut tokenizer = Tokenizer::new("AB~\nCé*".as_bytes(), config());
    while tokenizer.next_token().unwrap().is_some() {}

    let location = tokenizer.location();
    assert_eq!(location.line(), 2);
    assert_eq!(location.column(), 3);
    assert_eq!(location.offset(), 8);
}

#[test]
fn multibyte_words() {
    let mut tokenizer = Tokenizer::new("NM1*MÜLLER~".as_bytes(), config());
    tokenizer.next_token().unwrap();
    tokenizer.next_token().unwrap();

    assert_eq!(tokenizer.next_token().unwrap(), Some(Token::word("MÜLLER")));
}

#[test]
fn invalid_utf8_is_an_io_error() {
    let input: &[u8] = &[b'A', 0xFF, b'~'];
    let err = Tokenizer::new(input, config()).next_token().unwrap_err();

    assert!(err.is_io());
    let ErrorKind::Io(io) = err.kind() else {
        panic!("expected I/O error, got {err}");
    };
    assert_eq!(io.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn truncated_multibyte_character_is_an_io_error() {
    let input: &[u8] = &[b'A', 0xC3];
    let err = Tokenizer::new(input, config()).next_token().unwrap_err();

    assert!(err.is_io());
}
