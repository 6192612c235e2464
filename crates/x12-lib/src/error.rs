//! Errors raised while tokenizing, parsing or writing.
//!
//! Every failure is fatal for the current document: there is no segment-level
//! recovery. The kind says what went wrong; the optional [`Location`] says
//! where, and is attached by the reader once the error reaches the top.

use std::fmt;

use crate::location::Location;
use crate::token::{Token, TokenType};

/// What a parser would have accepted instead of the token it found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    Exact(Token),
    OneOf(Vec<TokenType>),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Exact(token) => write!(f, "{token}"),
            Expected::OneOf(types) if types.len() == 1 => write!(f, "{}", types[0]),
            Expected::OneOf(types) => {
                let names: Vec<String> = types.iter().map(ToString::to_string).collect();
                write!(f, "one of {}", names.join(", "))
            }
        }
    }
}

impl From<TokenType> for Expected {
    fn from(token_type: TokenType) -> Self {
        Expected::OneOf(vec![token_type])
    }
}

/// The construct that was open when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    Segment,
    Element,
    SubElement,
    Loop,
}

impl fmt::Display for InputContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            InputContext::Segment => "segment",
            InputContext::Element => "element",
            InputContext::SubElement => "sub-element",
            InputContext::Loop => "loop",
        };
        f.write_str(name)
    }
}

/// Invalid delimiter setup.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("sub-element separator not assigned")]
    SubElementSeparatorUnassigned,

    /// The separator is locked after its first assignment.
    #[error("sub-element separator already set to {current:?}, refusing {attempted:?}")]
    SubElementSeparatorLocked { current: char, attempted: char },

    #[error("{first} and {second} share the delimiter {delimiter:?}")]
    ConflictingDelimiters {
        delimiter: char,
        first: &'static str,
        second: &'static str,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("unexpected {actual}, expected {expected}")]
    UnexpectedToken { actual: Token, expected: Expected },

    #[error("unexpected end of input in {0}")]
    UnexpectedEndOfInput(InputContext),

    #[error("illegal configuration: {0}")]
    IllegalConfiguration(#[from] ConfigError),

    /// HL01..HL04 must hold level numbers and flags.
    #[error("malformed HL{element:02} value {value:?}")]
    MalformedHierarchy { element: u32, value: String },

    /// Nesting of loop parsers exceeded the configured limit.
    #[error("recursion limit exceeded")]
    RecursionLimitExceeded,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A failure with an optional location attached.
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    location: Option<Box<Location>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            location: None,
        }
    }

    pub fn unexpected(actual: Token, expected: impl Into<Expected>) -> Self {
        Self::new(ErrorKind::UnexpectedToken {
            actual,
            expected: expected.into(),
        })
    }

    pub fn end_of_input(context: InputContext) -> Self {
        Self::new(ErrorKind::UnexpectedEndOfInput(context))
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn into_kind(self) -> ErrorKind {
        self.kind
    }

    pub fn location(&self) -> Option<&Location> {
        self.location.as_deref()
    }

    /// Attaches `location` unless one is already present.
    pub fn with_location(mut self, location: Location) -> Self {
        if self.location.is_none() {
            self.location = Some(Box::new(location));
        }
        self
    }

    /// True for failures of the underlying stream rather than of the grammar.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.location {
            Some(location) => write!(f, "{location}: {}", self.kind),
            None => write!(f, "{}", self.kind),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        std::error::Error::source(&self.kind)
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self::new(kind)
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::new(ErrorKind::IllegalConfiguration(err))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}
