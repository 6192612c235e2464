//! x12: event-driven parser and writer for ANSI X12 eligibility documents.
//!
//! The engine turns a delimited character stream into [`EdiHandler`] callbacks
//! and can drive the same callbacks back into delimited text:
//! - `tokenizer` - delimiter-aware tokens over any `Read`
//! - `parser` - recursive descent over segments, elements and loops
//! - `reader` - document driver (ISA sub-element separator discovery)
//! - `writer` - events back to delimited text
//!
//! # Example
//!
//! ```
//! use x12_lib::{EdiReader, handler::{Event, render_tree}};
//!
//! let mut events: Vec<Event> = Vec::new();
//! let reader = EdiReader::new().require_interchange(false);
//! reader.parse_str("NM1*IL*1*DOE~", &mut events).expect("valid segment");
//! eprintln!("{}", render_tree(&events));
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod error;
pub mod handler;
pub mod location;
pub mod loops;
pub mod parser;
pub mod reader;
pub mod token;
pub mod tokenizer;
pub mod writer;

#[cfg(test)]
pub mod test_utils;

#[cfg(test)]
mod tokenizer_tests;

pub use config::{Configuration, ConfigurationBuilder, Delimiters, SubElementSeparator};
pub use error::{ConfigError, Error, ErrorKind, Expected, InputContext};
pub use handler::EdiHandler;
pub use location::Location;
pub use loops::LoopTable;
pub use reader::{EdiReader, ParseSummary};
pub use token::{Token, TokenType};
pub use tokenizer::Tokenizer;
pub use writer::EdiWriter;

/// Result type for parsing and serialization.
pub type Result<T> = std::result::Result<T, Error>;
