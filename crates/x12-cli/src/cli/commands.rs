//! Command builders for the CLI.
//!
//! Each command is built from the shared arg builders in `args.rs`.

use clap::Command;

use super::args::*;

pub fn build_cli() -> Command {
    Command::new("x12")
        .about("Inspect, check and re-serialize ANSI X12 eligibility documents")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(tokens_command())
        .subcommand(events_command())
        .subcommand(check_command())
        .subcommand(reformat_command())
        .subcommand(write_command())
        .subcommand(loops_command())
}

/// Flags every command that parses a document accepts.
fn with_reader_args(cmd: Command) -> Command {
    cmd.arg(input_arg())
        .arg(segment_terminator_arg())
        .arg(element_separator_arg())
        .arg(sub_element_separator_arg())
        .arg(no_wrap_errors_arg())
        .arg(no_interchange_arg())
        .arg(ignore_line_breaks_arg())
        .arg(loop_table_arg())
        .arg(color_arg())
        .arg(verbose_arg())
}

/// Print the token stream.
pub fn tokens_command() -> Command {
    let cmd = Command::new("tokens")
        .about("Print the token stream of a document")
        .override_usage(
            "\
  x12 tokens <FILE>
  x12 tokens -",
        )
        .after_help(
            r#"EXAMPLES:
  x12 tokens request.x12                   # one token per line
  x12 tokens --sub-element-separator '>' request.x12

NOTE: Tokens are split with the configured delimiters; ISA16 is not consulted."#,
        );

    with_reader_args(cmd)
}

/// Print the event stream.
pub fn events_command() -> Command {
    let cmd = Command::new("events")
        .about("Parse a document and print its events")
        .override_usage(
            "\
  x12 events <FILE>
  x12 events <FILE> --format json",
        )
        .after_help(
            r#"EXAMPLES:
  x12 events request.x12                   # indented loop/segment tree
  x12 events request.x12 --format json     # event stream for `x12 write`
  cat request.x12 | x12 events -"#,
        )
        .arg(format_arg());

    with_reader_args(cmd)
}

/// Validate a document.
pub fn check_command() -> Command {
    let cmd = Command::new("check")
        .about("Check that a document is well-formed")
        .override_usage(
            "\
  x12 check <FILE>
  x12 check -",
        )
        .after_help(
            r#"EXAMPLES:
  x12 check request.x12                    # silent on success, exit 1 on error
  x12 check --no-interchange fragment.x12  # document without ISA header"#,
        );

    with_reader_args(cmd)
}

/// Re-serialize with other delimiters.
pub fn reformat_command() -> Command {
    let cmd = Command::new("reformat")
        .about("Parse a document and write it back with the given delimiters")
        .override_usage(
            "\
  x12 reformat <FILE> [--out-segment-terminator <CHAR>] [--newline]",
        )
        .after_help(
            r#"EXAMPLES:
  x12 reformat request.x12 --newline       # one segment per line
  x12 reformat request.x12 --out-element-separator '+' --out-sub-element-separator ':'"#,
        )
        .arg(out_segment_terminator_arg())
        .arg(out_element_separator_arg())
        .arg(out_sub_element_separator_arg())
        .arg(newline_arg());

    with_reader_args(cmd)
}

/// Serialize a JSON event stream.
pub fn write_command() -> Command {
    Command::new("write")
        .about("Write a JSON event stream as X12 text")
        .override_usage(
            "\
  x12 write <FILE>
  x12 events request.x12 --format json | x12 write -",
        )
        .after_help(
            r#"EXAMPLES:
  x12 write events.json                    # default delimiters ~ * |
  x12 write events.json --segment-terminator "'" --newline"#,
        )
        .arg(input_arg().help("JSON event stream to read, or - for stdin"))
        .arg(segment_terminator_arg())
        .arg(element_separator_arg())
        .arg(sub_element_separator_arg())
        .arg(newline_arg())
        .arg(verbose_arg())
}

/// Show the loop allow-list table.
pub fn loops_command() -> Command {
    Command::new("loops")
        .about("Show the loop allow-list table")
        .after_help(
            r#"EXAMPLES:
  x12 loops                                # built-in 270/271 table
  x12 loops --loop-table custom.json --json"#,
        )
        .arg(loop_table_arg())
        .arg(json_arg())
        .arg(verbose_arg())
}
