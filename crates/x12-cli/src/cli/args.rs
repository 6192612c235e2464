//! Shared argument builders for CLI commands.
//!
//! Each function returns a `clap::Arg` that can be composed into commands.

use std::path::PathBuf;

use clap::{Arg, ArgAction, value_parser};

/// Input document (positional, `-` for stdin).
pub fn input_arg() -> Arg {
    Arg::new("input")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .default_value("-")
        .help("X12 document to read, or - for stdin")
}

/// Segment terminator (--segment-terminator).
pub fn segment_terminator_arg() -> Arg {
    Arg::new("segment_terminator")
        .long("segment-terminator")
        .value_name("CHAR")
        .value_parser(parse_delimiter)
        .help("Segment terminator [default: ~]")
}

/// Element separator (--element-separator).
pub fn element_separator_arg() -> Arg {
    Arg::new("element_separator")
        .long("element-separator")
        .value_name("CHAR")
        .value_parser(parse_delimiter)
        .help("Element separator [default: *]")
}

/// Sub-element separator (--sub-element-separator).
pub fn sub_element_separator_arg() -> Arg {
    Arg::new("sub_element_separator")
        .long("sub-element-separator")
        .value_name("CHAR")
        .value_parser(parse_delimiter)
        .help("Sub-element separator used when ISA16 does not provide one [default: |]")
}

/// Report errors without location (--no-wrap-errors).
pub fn no_wrap_errors_arg() -> Arg {
    Arg::new("no_wrap_errors")
        .long("no-wrap-errors")
        .action(ArgAction::SetTrue)
        .help("Report parse errors without segment/element position")
}

/// Accept documents without an ISA header (--no-interchange).
pub fn no_interchange_arg() -> Arg {
    Arg::new("no_interchange")
        .long("no-interchange")
        .action(ArgAction::SetTrue)
        .help("Accept documents that do not start with an ISA segment")
}

/// Drop CR/LF from element text (--ignore-line-breaks).
pub fn ignore_line_breaks_arg() -> Arg {
    Arg::new("ignore_line_breaks")
        .long("ignore-line-breaks")
        .action(ArgAction::SetTrue)
        .help("Ignore line breaks between segments")
}

/// Loop allow-list table in JSON (--loop-table).
pub fn loop_table_arg() -> Arg {
    Arg::new("loop_table")
        .long("loop-table")
        .value_name("FILE")
        .value_parser(value_parser!(PathBuf))
        .help("Loop allow-list table (JSON) replacing the built-in 270/271 table")
}

/// Colorize output (--color).
pub fn color_arg() -> Arg {
    Arg::new("color")
        .long("color")
        .value_name("WHEN")
        .default_value("auto")
        .value_parser(["auto", "always", "never"])
        .help("Colorize diagnostics")
}

/// Verbosity level (-v, -vv).
pub fn verbose_arg() -> Arg {
    Arg::new("verbose")
        .short('v')
        .action(ArgAction::Count)
        .help("Verbosity level (-v for debug logs, -vv for trace logs)")
}

/// Event output format (--format).
pub fn format_arg() -> Arg {
    Arg::new("format")
        .long("format")
        .value_name("FORMAT")
        .default_value("tree")
        .value_parser(["tree", "json"])
        .help("Output format")
}

/// Output as JSON (--json).
pub fn json_arg() -> Arg {
    Arg::new("json")
        .long("json")
        .action(ArgAction::SetTrue)
        .help("Output as JSON")
}

/// Output segment terminator (--out-segment-terminator).
pub fn out_segment_terminator_arg() -> Arg {
    Arg::new("out_segment_terminator")
        .long("out-segment-terminator")
        .value_name("CHAR")
        .value_parser(parse_delimiter)
        .help("Segment terminator to write [default: input's]")
}

/// Output element separator (--out-element-separator).
pub fn out_element_separator_arg() -> Arg {
    Arg::new("out_element_separator")
        .long("out-element-separator")
        .value_name("CHAR")
        .value_parser(parse_delimiter)
        .help("Element separator to write [default: input's]")
}

/// Output sub-element separator (--out-sub-element-separator).
pub fn out_sub_element_separator_arg() -> Arg {
    Arg::new("out_sub_element_separator")
        .long("out-sub-element-separator")
        .value_name("CHAR")
        .value_parser(parse_delimiter)
        .help("Sub-element separator to write [default: input's]")
}

/// Line break after each segment (--newline).
pub fn newline_arg() -> Arg {
    Arg::new("newline")
        .long("newline")
        .action(ArgAction::SetTrue)
        .help("Write a line break after every segment terminator")
}

fn parse_delimiter(value: &str) -> Result<char, String> {
    let mut chars = value.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => Ok(ch),
        _ => Err(format!("expected a single character, got {value:?}")),
    }
}
