//! Tokens produced by the tokenizer.

use std::fmt;

/// One lexical unit of an X12 stream.
///
/// The three delimiter variants carry no data, so equality is structural and
/// they behave as singletons. `Word` owns its literal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Word(String),
    ElementSeparator,
    SubElementSeparator,
    SegmentTerminator,
}

impl Token {
    pub fn word(text: impl Into<String>) -> Self {
        Token::Word(text.into())
    }

    pub fn token_type(&self) -> TokenType {
        match self {
            Token::Word(_) => TokenType::Word,
            Token::ElementSeparator => TokenType::ElementSeparator,
            Token::SubElementSeparator => TokenType::SubElementSeparator,
            Token::SegmentTerminator => TokenType::SegmentTerminator,
        }
    }

    /// Word text, or `None` for delimiter tokens.
    pub fn as_word(&self) -> Option<&str> {
        match self {
            Token::Word(text) => Some(text),
            _ => None,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Token::Word(_))
    }

    /// True when this is a `Word` spelling exactly `text`.
    pub fn is_word_eq(&self, text: &str) -> bool {
        self.as_word() == Some(text)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(text) => write!(f, "word {text:?}"),
            other => write!(f, "{}", other.token_type()),
        }
    }
}

/// Discriminant of a [`Token`], used when several token kinds are acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenType {
    Word,
    ElementSeparator,
    SubElementSeparator,
    SegmentTerminator,
}

impl fmt::Display for TokenType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TokenType::Word => "word",
            TokenType::ElementSeparator => "element separator",
            TokenType::SubElementSeparator => "sub-element separator",
            TokenType::SegmentTerminator => "segment terminator",
        };
        f.write_str(name)
    }
}
