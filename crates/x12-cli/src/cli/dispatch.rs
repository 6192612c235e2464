//! Dispatch logic: extract params from ArgMatches and convert to command args.
//!
//! This module contains:
//! - `*Params` structs that mirror command `*Args` but are populated from clap
//! - `from_matches()` extractors
//! - `Into<*Args>` impls to bridge dispatch → command handlers

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::ArgMatches;
use x12_lib::Delimiters;

use crate::commands::check::CheckArgs;
use crate::commands::events::{EventFormat, EventsArgs};
use crate::commands::input::SourceArgs;
use crate::commands::loops::LoopsArgs;
use crate::commands::reformat::{OutputDelimiters, ReformatArgs};
use crate::commands::tokens::TokensArgs;
use crate::commands::write::WriteArgs;

/// Input and parsing flags shared by every command that reads a document.
pub struct SourceParams {
    pub input: PathBuf,
    pub segment_terminator: Option<char>,
    pub element_separator: Option<char>,
    pub sub_element_separator: Option<char>,
    pub no_wrap_errors: bool,
    pub no_interchange: bool,
    pub ignore_line_breaks: bool,
    pub loop_table: Option<PathBuf>,
    /// Diagnostics are colored; `--color` already resolved.
    pub color: bool,
}

impl SourceParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            segment_terminator: m.get_one::<char>("segment_terminator").copied(),
            element_separator: m.get_one::<char>("element_separator").copied(),
            sub_element_separator: m.get_one::<char>("sub_element_separator").copied(),
            no_wrap_errors: m.get_flag("no_wrap_errors"),
            no_interchange: m.get_flag("no_interchange"),
            ignore_line_breaks: m.get_flag("ignore_line_breaks"),
            loop_table: m.get_one::<PathBuf>("loop_table").cloned(),
            color: colored_diagnostics(m),
        }
    }

    pub fn delimiters(&self) -> Delimiters {
        delimiters(
            self.segment_terminator,
            self.element_separator,
            self.sub_element_separator,
        )
    }
}

impl From<SourceParams> for SourceArgs {
    fn from(p: SourceParams) -> Self {
        Self {
            delimiters: p.delimiters(),
            path: p.input,
            wrap_errors: !p.no_wrap_errors,
            require_interchange: !p.no_interchange,
            ignore_line_breaks: p.ignore_line_breaks,
            loop_table: p.loop_table,
            color: p.color,
        }
    }
}

pub struct TokensParams {
    pub source: SourceParams,
}

impl TokensParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
        }
    }
}

impl From<TokensParams> for TokensArgs {
    fn from(p: TokensParams) -> Self {
        Self {
            source: p.source.into(),
        }
    }
}

pub struct EventsParams {
    pub source: SourceParams,
    pub format: EventFormat,
}

impl EventsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        let format = match m.get_one::<String>("format").map(String::as_str) {
            Some("json") => EventFormat::Json,
            _ => EventFormat::Tree,
        };

        Self {
            source: SourceParams::from_matches(m),
            format,
        }
    }
}

impl From<EventsParams> for EventsArgs {
    fn from(p: EventsParams) -> Self {
        Self {
            source: p.source.into(),
            format: p.format,
        }
    }
}

pub struct CheckParams {
    pub source: SourceParams,
}

impl CheckParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
        }
    }
}

impl From<CheckParams> for CheckArgs {
    fn from(p: CheckParams) -> Self {
        Self {
            source: p.source.into(),
        }
    }
}

pub struct ReformatParams {
    pub source: SourceParams,
    pub output: OutputDelimiters,
    pub newline: bool,
}

impl ReformatParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            source: SourceParams::from_matches(m),
            output: OutputDelimiters {
                segment_terminator: m.get_one::<char>("out_segment_terminator").copied(),
                element_separator: m.get_one::<char>("out_element_separator").copied(),
                sub_element_separator: m.get_one::<char>("out_sub_element_separator").copied(),
            },
            newline: m.get_flag("newline"),
        }
    }
}

impl From<ReformatParams> for ReformatArgs {
    fn from(p: ReformatParams) -> Self {
        Self {
            source: p.source.into(),
            output: p.output,
            newline: p.newline,
        }
    }
}

pub struct WriteParams {
    pub input: PathBuf,
    pub delimiters: Delimiters,
    pub newline: bool,
}

impl WriteParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            input: parse_input(m),
            delimiters: delimiters(
                m.get_one::<char>("segment_terminator").copied(),
                m.get_one::<char>("element_separator").copied(),
                m.get_one::<char>("sub_element_separator").copied(),
            ),
            newline: m.get_flag("newline"),
        }
    }
}

impl From<WriteParams> for WriteArgs {
    fn from(p: WriteParams) -> Self {
        Self {
            path: p.input,
            delimiters: p.delimiters,
            newline: p.newline,
        }
    }
}

pub struct LoopsParams {
    pub loop_table: Option<PathBuf>,
    pub json: bool,
}

impl LoopsParams {
    pub fn from_matches(m: &ArgMatches) -> Self {
        Self {
            loop_table: m.get_one::<PathBuf>("loop_table").cloned(),
            json: m.get_flag("json"),
        }
    }
}

impl From<LoopsParams> for LoopsArgs {
    fn from(p: LoopsParams) -> Self {
        Self {
            loop_table: p.loop_table,
            json: p.json,
        }
    }
}

fn parse_input(m: &ArgMatches) -> PathBuf {
    m.get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from("-"))
}

/// `auto` colors when stderr, where errors are printed, is a terminal.
fn colored_diagnostics(m: &ArgMatches) -> bool {
    match m.get_one::<String>("color").map(String::as_str) {
        Some("always") => true,
        Some("never") => false,
        _ => io::stderr().is_terminal(),
    }
}

fn delimiters(
    segment_terminator: Option<char>,
    element_separator: Option<char>,
    sub_element_separator: Option<char>,
) -> Delimiters {
    let defaults = Delimiters::default();
    Delimiters {
        segment_terminator: segment_terminator.unwrap_or(defaults.segment_terminator),
        element_separator: element_separator.unwrap_or(defaults.element_separator),
        sub_element_separator: sub_element_separator.unwrap_or(defaults.sub_element_separator),
    }
}
