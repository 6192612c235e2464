//! Tests for CLI dispatch logic.
//!
//! These tests verify:
//! 1. Shared reader flags are accepted by every document command
//! 2. Delimiter flags take exactly one character
//! 3. Params extraction: correct fields are extracted from ArgMatches

use std::path::PathBuf;

use super::*;
use crate::cli::commands::{
    build_cli, check_command, events_command, loops_command, reformat_command, tokens_command,
    write_command,
};
use crate::commands::events::EventFormat;

#[test]
fn input_defaults_to_stdin() {
    let m = check_command().try_get_matches_from(["check"]).unwrap();
    let params = CheckParams::from_matches(&m);

    assert_eq!(params.source.input, PathBuf::from("-"));
    assert!(!params.source.no_interchange);
}

#[test]
fn reader_flags() {
    let result = tokens_command().try_get_matches_from([
        "tokens",
        "request.x12",
        "--segment-terminator",
        "'",
        "--element-separator",
        "+",
        "--sub-element-separator",
        ":",
        "--no-wrap-errors",
        "--no-interchange",
        "--ignore-line-breaks",
        "--loop-table",
        "loops.json",
        "--color",
        "never",
    ]);
    assert!(
        result.is_ok(),
        "tokens should accept reader flags: {:?}",
        result.err()
    );

    let m = result.unwrap();
    let params = TokensParams::from_matches(&m);

    assert_eq!(params.source.input, PathBuf::from("request.x12"));
    assert_eq!(params.source.segment_terminator, Some('\''));
    assert_eq!(params.source.element_separator, Some('+'));
    assert_eq!(params.source.sub_element_separator, Some(':'));
    assert!(params.source.no_wrap_errors);
    assert!(params.source.no_interchange);
    assert!(params.source.ignore_line_breaks);
    assert_eq!(params.source.loop_table, Some(PathBuf::from("loops.json")));
    assert!(!params.source.color);
}

#[test]
fn color_flag() {
    let m = check_command()
        .try_get_matches_from(["check", "a.x12", "--color", "always"])
        .unwrap();
    assert!(CheckParams::from_matches(&m).source.color);

    let m = events_command()
        .try_get_matches_from(["events", "a.x12", "--color", "never"])
        .unwrap();
    assert!(!EventsParams::from_matches(&m).source.color);

    let result = check_command().try_get_matches_from(["check", "--color", "sometimes"]);
    assert!(result.is_err());
}

#[test]
fn unset_delimiters_fall_back_to_defaults() {
    let m = check_command()
        .try_get_matches_from(["check", "a.x12", "--element-separator", "^"])
        .unwrap();
    let delimiters = CheckParams::from_matches(&m).source.delimiters();

    assert_eq!(delimiters.segment_terminator, '~');
    assert_eq!(delimiters.element_separator, '^');
    assert_eq!(delimiters.sub_element_separator, '|');
}

#[test]
fn delimiter_must_be_one_character() {
    let result =
        check_command().try_get_matches_from(["check", "a.x12", "--segment-terminator", "~~"]);

    assert!(result.is_err());
}

#[test]
fn events_format() {
    let m = events_command()
        .try_get_matches_from(["events", "a.x12", "--format", "json"])
        .unwrap();
    assert_eq!(EventsParams::from_matches(&m).format, EventFormat::Json);

    let m = events_command()
        .try_get_matches_from(["events", "a.x12"])
        .unwrap();
    assert_eq!(EventsParams::from_matches(&m).format, EventFormat::Tree);

    let result = events_command().try_get_matches_from(["events", "--format", "xml"]);
    assert!(result.is_err());
}

#[test]
fn reformat_output_delimiters() {
    let m = reformat_command()
        .try_get_matches_from([
            "reformat",
            "a.x12",
            "--out-element-separator",
            "+",
            "--newline",
        ])
        .unwrap();
    let params = ReformatParams::from_matches(&m);

    assert_eq!(params.output.segment_terminator, None);
    assert_eq!(params.output.element_separator, Some('+'));
    assert_eq!(params.output.sub_element_separator, None);
    assert!(params.newline);
}

#[test]
fn write_does_not_take_reader_flags() {
    let result = write_command().try_get_matches_from(["write", "events.json", "--no-interchange"]);
    assert!(result.is_err());

    let m = write_command()
        .try_get_matches_from(["write", "events.json", "--sub-element-separator", ">"])
        .unwrap();
    let params = WriteParams::from_matches(&m);

    assert_eq!(params.input, PathBuf::from("events.json"));
    assert_eq!(params.delimiters.sub_element_separator, '>');
    assert!(!params.newline);
}

#[test]
fn loops_flags() {
    let m = loops_command()
        .try_get_matches_from(["loops", "--json", "-vv"])
        .unwrap();
    let params = LoopsParams::from_matches(&m);

    assert!(params.json);
    assert_eq!(params.loop_table, None);
    assert_eq!(m.get_count("verbose"), 2);
}

#[test]
fn subcommand_required() {
    let result = build_cli().try_get_matches_from(["x12"]);
    assert!(result.is_err());
}

#[test]
fn cli_definition_is_consistent() {
    build_cli().debug_assert();
}
